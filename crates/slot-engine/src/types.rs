//! Request and response shapes exchanged with callers.
//!
//! Field names are camelCase on the wire. Practitioner-keyed maps keep the
//! order in which practitioners were encountered in the input.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::classify::SlotKind;
use crate::config::SlotOptions;
use crate::intervals::Booking;

/// An insertion-ordered map from practitioner id to `V`.
///
/// Serialized as a JSON object. Re-inserting an existing id replaces its value
/// in place, so the first occurrence fixes the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PractitionerMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for PractitionerMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> PractitionerMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: V) {
        let id = id.into();
        match self.entries.iter_mut().find(|(k, _)| *k == id) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((id, value)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, v)| v)
    }

    /// Mutable access to the value for `id`, inserting `V::default()` at the
    /// end if the id has not been seen yet.
    pub fn entry_or_default(&mut self, id: &str) -> &mut V
    where
        V: Default,
    {
        let idx = match self.entries.iter().position(|(k, _)| k == id) {
            Some(idx) => idx,
            None => {
                self.entries.push((id.to_string(), V::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for PractitionerMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (id, value) in iter {
            map.insert(id, value);
        }
        map
    }
}

impl<V> IntoIterator for PractitionerMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for PractitionerMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, value) in &self.entries {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

struct PractitionerMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for PractitionerMapVisitor<V> {
    type Value = PractitionerMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object keyed by practitioner id")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = PractitionerMap::new();
        while let Some((id, value)) = access.next_entry::<String, V>()? {
            map.insert(id, value);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for PractitionerMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PractitionerMapVisitor(PhantomData))
    }
}

/// Classified start times for one practitioner.
///
/// The three buckets partition the candidate set; each holds "HH:MM" start
/// times in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotClassification {
    pub strict: Vec<String>,
    pub soft: Vec<String>,
    pub bad: Vec<String>,
    /// Reason text for every entry in `bad`, keyed by start time.
    pub bad_reasons: BTreeMap<String, String>,
}

impl SlotClassification {
    pub fn bucket(&self, kind: SlotKind) -> &[String] {
        match kind {
            SlotKind::Strict => &self.strict,
            SlotKind::Soft => &self.soft,
            SlotKind::Bad => &self.bad,
        }
    }

    /// Total number of classified candidates across all buckets.
    pub fn len(&self) -> usize {
        self.strict.len() + self.soft.len() + self.bad.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bucket a start time landed in, if it was a candidate at all.
    pub fn kind_of(&self, start: &str) -> Option<SlotKind> {
        [SlotKind::Strict, SlotKind::Soft, SlotKind::Bad]
            .into_iter()
            .find(|&kind| self.bucket(kind).iter().any(|s| s == start))
    }
}

/// Classify a requested duration against each practitioner's bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    pub duration: i64,
    pub bookings_by_practitioner: PractitionerMap<Vec<Booking>>,
    #[serde(flatten)]
    pub options: SlotOptions,
}

pub type ClassifyResponse = PractitionerMap<SlotClassification>;

/// A booking that names its practitioner, as held by the booking store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PractitionerBooking {
    #[serde(rename = "therapistId")]
    pub practitioner_id: String,
    pub start: String,
    pub end: String,
    /// Informational; the interval is taken from `start` and `end`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
}

/// A flat list of bookings across practitioners, grouped by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSlotsRequest {
    pub duration: i64,
    pub bookings: Vec<PractitionerBooking>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PractitionerRef {
    #[serde(rename = "therapistId")]
    pub practitioner_id: String,
}

/// One practitioner's entry in a best-slots response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSlots {
    #[serde(rename = "therapist")]
    pub practitioner: PractitionerRef,
    pub best_slots: SlotClassification,
}

/// A free interval rendered as clock text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeInterval {
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
}
