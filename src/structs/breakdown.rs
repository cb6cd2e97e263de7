use std::fmt;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub points: i64,
}

/// Per-category points, kept in the order the service sent them.
///
/// On the wire this is a plain JSON object (`{"Code Quality & ...": 20}`);
/// the category names are free text, so the object is read entry by entry
/// instead of into a keyed map that would lose the display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Breakdown(Vec<CategoryScore>);

impl Breakdown {
    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> i64 {
        self.0.iter().map(|entry| entry.points).sum()
    }

    /// Inserts or overwrites a category. An overwritten category keeps its position.
    pub fn set(&mut self, category: &str, points: i64) {
        match self.0.iter_mut().find(|entry| entry.category == category) {
            Some(entry) => entry.points = points,
            None => self.0.push(CategoryScore { category: category.to_string(), points }),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut breakdown = Breakdown::default();
        for (category, points) in iter {
            breakdown.set(&category.into(), points);
        }
        breakdown
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.category, &entry.points)?;
        }
        map.end()
    }
}

struct BreakdownVisitor;

impl<'de> Visitor<'de> for BreakdownVisitor {
    type Value = Breakdown;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of category names to integer points")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut breakdown = Breakdown(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((category, points)) = access.next_entry::<String, i64>()? {
            breakdown.set(&category, points);
        }
        Ok(breakdown)
    }
}

impl<'de> Deserialize<'de> for Breakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BreakdownVisitor)
    }
}
