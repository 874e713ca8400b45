// src/application/validation.rs
//! Field-validation trees and their flattening.
//!
//! Input types describe their failures as a tree: one node per property,
//! each with the constraints it violated and nodes for nested properties.
//! The tree is reduced to the flat message list clients receive.

use crate::domain::errors::FieldError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationNode {
    pub property: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Constraint name -> violation message.
    #[serde(default)]
    pub constraints: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<ValidationNode>,
}

impl ValidationNode {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn constraint(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.constraints.insert(name.into(), message.into());
        self
    }

    pub fn child(mut self, node: ValidationNode) -> Self {
        self.children.push(node);
        self
    }

    /// A node with no constraints anywhere below it contributes nothing.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty() && self.children.iter().all(ValidationNode::is_empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlattenError {
    #[error("validation tree exceeds maximum depth of {limit}")]
    DepthExceeded { limit: usize },
}

/// Pre-order flattening: a node's own messages come before its children's.
///
/// Depth counts the top-level nodes as depth 1; any node deeper than
/// `max_depth` aborts the whole flattening.
pub fn flatten_validation_errors(
    nodes: &[ValidationNode],
    max_depth: usize,
) -> Result<Vec<String>, FlattenError> {
    let mut out = Vec::new();
    for node in nodes {
        flatten_node(node, 1, max_depth, &mut out)?;
    }
    Ok(out)
}

fn flatten_node(
    node: &ValidationNode,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<String>,
) -> Result<(), FlattenError> {
    if depth > max_depth {
        return Err(FlattenError::DepthExceeded { limit: max_depth });
    }
    out.extend(node.constraints.values().cloned());
    for child in &node.children {
        flatten_node(child, depth + 1, max_depth, out)?;
    }
    Ok(())
}

/// Same traversal as [`flatten_validation_errors`] but keeps the dotted
/// property path and offending value of every message.
pub fn collect_field_errors(
    nodes: &[ValidationNode],
    max_depth: usize,
) -> Result<Vec<FieldError>, FlattenError> {
    let mut out = Vec::new();
    for node in nodes {
        collect_node(node, None, 1, max_depth, &mut out)?;
    }
    Ok(out)
}

fn collect_node(
    node: &ValidationNode,
    parent: Option<&str>,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<FieldError>,
) -> Result<(), FlattenError> {
    if depth > max_depth {
        return Err(FlattenError::DepthExceeded { limit: max_depth });
    }
    let path = match parent {
        Some(parent) => format!("{parent}.{}", node.property),
        None => node.property.clone(),
    };
    for message in node.constraints.values() {
        let mut error = FieldError::new(path.clone(), message.clone());
        error.value = node.value.clone();
        out.push(error);
    }
    for child in &node.children {
        collect_node(child, Some(&path), depth + 1, max_depth, out)?;
    }
    Ok(())
}

/// Implemented by request payloads that check their own fields.
pub trait Validate {
    fn validate(&self) -> Vec<ValidationNode>;
}
