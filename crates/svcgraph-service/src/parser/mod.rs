//! Service descriptor parser.
//!
//! Turns descriptor text into a [`ServiceDescriptor`]. Parsing never fails:
//! the grammar is permissive, and unreadable files degrade to a name-only
//! descriptor with a diagnostic.

pub mod ast;
pub mod lexer;

use std::path::Path;

use svcgraph_common::constants::strip_parameter;
use svcgraph_common::types::{DependencyKind, ServiceType};

use self::ast::ServiceDescriptor;
use self::lexer::Line;

/// A property whose value may still grow through continuation lines.
struct PendingProperty<'a> {
    name: &'a str,
    value: String,
}

/// Derives a service name from a descriptor path.
///
/// ```
/// use std::path::Path;
/// use svcgraph_service::parser::service_name_from_path;
///
/// assert_eq!(service_name_from_path(Path::new("/etc/dinit.d/getty@tty1")), "getty");
/// ```
#[must_use]
pub fn service_name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy());
    strip_parameter(&file_name).to_owned()
}

/// Reads and parses a descriptor file.
///
/// If the file cannot be read as text, a warning is logged and a descriptor
/// with only the derived name and default type is returned.
pub fn parse_descriptor(path: &Path) -> ServiceDescriptor {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_descriptor_str(path, &content),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read service file");
            ServiceDescriptor::new(service_name_from_path(path), path)
        }
    }
}

/// Parses descriptor text read from `path`.
///
/// `path` only provides the service name and the anchor for relative
/// directory dependencies; it is not read.
pub fn parse_descriptor_str(path: &Path, content: &str) -> ServiceDescriptor {
    let mut desc = ServiceDescriptor::new(service_name_from_path(path), path);
    let mut pending: Option<PendingProperty<'_>> = None;

    for raw in content.lines() {
        if lexer::has_parameter_placeholder(raw) {
            desc.has_parameters = true;
        }
        let trimmed = raw.trim_start();

        if let Some(prop) = pending.as_mut() {
            if lexer::is_continuation(raw) {
                let segment = lexer::strip_comment(trimmed);
                if !segment.is_empty() {
                    if !prop.value.is_empty() {
                        prop.value.push(' ');
                    }
                    prop.value.push_str(&segment);
                }
                continue;
            }
        }

        if let Some(prop) = pending.take() {
            apply_property(&mut desc, prop.name, &prop.value);
        }

        match lexer::classify(raw) {
            Line::Property { name, value } => {
                pending = Some(PendingProperty {
                    name,
                    value: lexer::strip_comment(value),
                });
            }
            Line::Meta(directive) => {
                tracing::trace!(service = %desc.name, directive, "ignoring meta-directive");
            }
            Line::Blank | Line::Comment | Line::Malformed => {}
        }
    }

    if let Some(prop) = pending.take() {
        apply_property(&mut desc, prop.name, &prop.value);
    }

    tracing::debug!(
        service = %desc.name,
        service_type = %desc.service_type,
        has_parameters = desc.has_parameters,
        "parsed service descriptor"
    );
    desc
}

fn apply_property(desc: &mut ServiceDescriptor, name: &str, value: &str) {
    if name == "type" {
        if let Some(keyword) = value.split_whitespace().next() {
            desc.service_type = ServiceType::from_keyword(keyword).unwrap_or_else(|| {
                tracing::debug!(service = %desc.name, keyword, "unrecognized service type");
                ServiceType::Unknown
            });
        }
        return;
    }

    let Some(kind) = DependencyKind::from_property(name) else {
        return;
    };
    let tokens = value
        .split_whitespace()
        .filter_map(dependency_name)
        .map(str::to_owned);
    desc.dependencies.entry(kind).or_default().extend(tokens);
}

/// Normalizes a dependency token: strips the instance argument and drops
/// parameter placeholders and empty names.
fn dependency_name(token: &str) -> Option<&str> {
    let name = strip_parameter(token);
    if name.is_empty() || name.starts_with('$') {
        None
    } else {
        Some(name)
    }
}
