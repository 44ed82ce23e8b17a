use std::collections::HashMap;

use crate::diff::{DiffResponse, PermissionChangeItem};

pub const NO_CHANGES: &str = "This PR doesn't change any permissions";
pub const GRANTED_HEADER: &str = "This PR grants the following NEW permissions:";
pub const REVOKED_HEADER: &str = "This PR revokes the following permissions:";

const PRINCIPAL_PREFIX: &str = " principal: ";
const RESOURCE_PREFIX: &str = "   resource: ";
const ACTION_PREFIX: &str = "      ";

#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Actions grouped by principal, then by resource ARN.
///
/// Principals and resources keep first-seen order, actions keep received
/// order. Repeated actions are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedDiff {
    principals: Vec<PrincipalGroup>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalGroup {
    principal: String,
    resources: Vec<ResourceGroup>,
    index: HashMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    resource_arn: String,
    actions: Vec<String>,
}

impl GroupedDiff {
    pub fn push(&mut self, item: &PermissionChangeItem) {
        self.principal_entry(&item.principal)
            .resource_entry(&item.resource_arn)
            .actions
            .push(item.action.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }

    pub fn principals(&self) -> &[PrincipalGroup] {
        &self.principals
    }

    pub fn actions(&self, principal: &str, resource_arn: &str) -> Option<&[String]> {
        let group = &self.principals[*self.index.get(principal)?];
        let resource = &group.resources[*group.index.get(resource_arn)?];
        Some(&resource.actions)
    }

    fn principal_entry(&mut self, principal: &str) -> &mut PrincipalGroup {
        let position = match self.index.get(principal) {
            Some(&position) => position,
            None => {
                self.principals.push(PrincipalGroup::new(principal));
                let position = self.principals.len() - 1;
                self.index.insert(principal.to_string(), position);
                position
            }
        };
        &mut self.principals[position]
    }
}

impl PrincipalGroup {
    fn new(principal: &str) -> Self {
        Self {
            principal: principal.to_string(),
            resources: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn resources(&self) -> &[ResourceGroup] {
        &self.resources
    }

    fn resource_entry(&mut self, resource_arn: &str) -> &mut ResourceGroup {
        let position = match self.index.get(resource_arn) {
            Some(&position) => position,
            None => {
                self.resources.push(ResourceGroup {
                    resource_arn: resource_arn.to_string(),
                    actions: Vec::new(),
                });
                let position = self.resources.len() - 1;
                self.index.insert(resource_arn.to_string(), position);
                position
            }
        };
        &mut self.resources[position]
    }
}

impl ResourceGroup {
    pub fn resource_arn(&self) -> &str {
        &self.resource_arn
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }
}

pub fn group(items: &[PermissionChangeItem]) -> GroupedDiff {
    let mut grouped = GroupedDiff::default();
    for item in items {
        grouped.push(item);
    }
    grouped
}

/// The text report as a list of lines, granted section first.
pub fn text_lines(diff: &DiffResponse) -> Vec<String> {
    let granted = group(&diff.granted);
    let revoked = group(&diff.revoked);

    if granted.is_empty() && revoked.is_empty() {
        return vec![NO_CHANGES.to_string()];
    }

    let mut lines = Vec::new();
    if !granted.is_empty() {
        lines.push(GRANTED_HEADER.to_string());
        push_grouped(&mut lines, &granted);
    }
    if !revoked.is_empty() {
        lines.push(REVOKED_HEADER.to_string());
        push_grouped(&mut lines, &revoked);
    }
    lines
}

pub fn render_text(diff: &DiffResponse) -> String {
    text_lines(diff).join(LINE_SEPARATOR)
}

fn push_grouped(lines: &mut Vec<String>, grouped: &GroupedDiff) {
    for principal in grouped.principals() {
        lines.push(format!("{}{}", PRINCIPAL_PREFIX, principal.principal()));
        for resource in principal.resources() {
            lines.push(format!("{}{}", RESOURCE_PREFIX, resource.resource_arn()));
            for action in resource.actions() {
                lines.push(format!("{}{}", ACTION_PREFIX, action));
            }
        }
    }
}
