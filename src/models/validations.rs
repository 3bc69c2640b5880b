//! Per-host validation results grouped by validation group.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Success,
    Failure,
    Pending,
    Disabled,
    /// Any status this crate does not know, e.g. `error`. Never counted as success.
    #[serde(other)]
    Unknown,
}

/// Whether a failing validation stops the wizard or only warns.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Blocking,
    Soft,
}

/// A single validation result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub id: String,
    pub status: ValidationStatus,
    /// Severity as reported. When absent the step table decides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<ValidationSeverity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Validation {
    pub fn new(id: &str, status: ValidationStatus, severity: ValidationSeverity) -> Self {
        Validation {
            severity: Some(severity),
            ..Validation::unrated(id, status)
        }
    }

    /// A result without a reported severity.
    pub fn unrated(id: &str, status: ValidationStatus) -> Self {
        Validation {
            id: id.to_string(),
            status,
            severity: None,
            message: None,
        }
    }
}

/// Validation results of one group, in reported order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationGroup {
    pub name: String,
    pub validations: Vec<Validation>,
}

/// Mapping from group name to its results.
///
/// Serialized as a JSON object; group order is the order the keys appear in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationsInfo {
    groups: Vec<ValidationGroup>,
}

impl ValidationsInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group. A group with the same name is replaced in place.
    pub fn insert(&mut self, name: &str, validations: Vec<Validation>) {
        match self.groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.validations = validations,
            None => self.groups.push(ValidationGroup {
                name: name.to_string(),
                validations,
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Validation]> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.validations.as_slice())
    }

    pub fn groups(&self) -> impl Iterator<Item = &ValidationGroup> {
        self.groups.iter()
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    /// All results across groups, in group order.
    pub fn validations(&self) -> impl Iterator<Item = &Validation> {
        self.groups.iter().flat_map(|g| g.validations.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<ValidationGroup> for ValidationsInfo {
    fn from_iter<I: IntoIterator<Item = ValidationGroup>>(iter: I) -> Self {
        let mut info = ValidationsInfo::new();
        for group in iter {
            info.insert(&group.name, group.validations);
        }
        info
    }
}

impl Serialize for ValidationsInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.name, &group.validations)?;
        }
        map.end()
    }
}

struct ValidationsInfoVisitor;

impl<'de> Visitor<'de> for ValidationsInfoVisitor {
    type Value = ValidationsInfo;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of validation group name to validation results")
    }

    fn visit_map<A>(self, mut access: A) -> Result<ValidationsInfo, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut info = ValidationsInfo::new();
        while let Some((name, validations)) = access.next_entry::<String, Vec<Validation>>()? {
            info.insert(&name, validations);
        }
        Ok(info)
    }
}

impl<'de> Deserialize<'de> for ValidationsInfo {
    fn deserialize<D>(deserializer: D) -> Result<ValidationsInfo, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ValidationsInfoVisitor)
    }
}
