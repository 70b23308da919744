//! Document event envelope and the typed document shapes the rules inspect.
//!
//! Documents arrive as full post-mutation JSON snapshots. Every typed field is
//! decoded leniently: a `null` or a value of the wrong shape is treated as
//! absent, so a malformed field surfaces as a rule violation instead of a
//! parse error that would let the write through unchecked.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::types::DocumentId;

// ---------------------------------------------------------------------------
// Document type names
// ---------------------------------------------------------------------------

/// `_type` values of the documents this crate knows about.
pub mod document_types {
    pub const PRODUCT: &str = "product";
    pub const PRODUCT_PRICING: &str = "productPricing";
    pub const STORE_LOCATION: &str = "storeLocation";
}

/// The document kinds that carry a validation rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    Product,
    ProductPricing,
}

impl DocumentKind {
    /// Resolve a `_type` name. Returns `None` for types without rules.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            document_types::PRODUCT => Some(Self::Product),
            document_types::PRODUCT_PRICING => Some(Self::ProductPricing),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Product => document_types::PRODUCT,
            Self::ProductPricing => document_types::PRODUCT_PRICING,
        }
    }
}

// ---------------------------------------------------------------------------
// Event envelope
// ---------------------------------------------------------------------------

/// Mutation kind reported by the host event dispatcher.
///
/// Accepts both the dotted form (`"document.create"`) and the bare form
/// (`"create"`). Anything else is kept verbatim in [`EventKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Create,
    Update,
    Delete,
    Other(String),
}

impl EventKind {
    /// Only creates and updates are subject to validation and auditing.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }

    /// Canonical dotted operation name, as written to audit records.
    pub fn as_operation(&self) -> &str {
        match self {
            Self::Create => "document.create",
            Self::Update => "document.update",
            Self::Delete => "document.delete",
            Self::Other(raw) => raw,
        }
    }
}

impl Default for EventKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for EventKind {
    fn from(raw: String) -> Self {
        let known = match raw.strip_prefix("document.").unwrap_or(&raw) {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        };
        known.unwrap_or(Self::Other(raw))
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Other(raw) => raw,
            known => known.as_operation().to_string(),
        }
    }
}

/// A single document mutation event as delivered by the host.
///
/// The snapshot may arrive as `document`, or nested in `data` / `data.data`
/// depending on the host's envelope. Missing pieces are not an error; see
/// [`snapshot`](Self::snapshot) and [`document_type`](Self::document_type).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEvent {
    #[serde(rename = "type", default, deserialize_with = "lenient_kind")]
    pub kind: EventKind,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub document_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl DocumentEvent {
    /// Build an event around a full document snapshot.
    pub fn new(kind: EventKind, document: Value) -> Self {
        Self {
            kind,
            document: Some(document),
            ..Self::default()
        }
    }

    /// The post-mutation document, if the envelope carries an object.
    pub fn snapshot(&self) -> Option<&Value> {
        let nested = || {
            let data = self.data.as_ref()?;
            match data.get("data") {
                Some(inner) if inner.is_object() => Some(inner),
                _ => Some(data),
            }
        };
        self.document
            .as_ref()
            .or_else(nested)
            .filter(|doc| doc.is_object())
    }

    /// Explicit `documentType`, falling back to the snapshot's `_type`.
    pub fn document_type(&self) -> Option<&str> {
        self.document_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.snapshot()?.get("_type")?.as_str())
            .filter(|t| !t.is_empty())
    }

    /// The snapshot's `_id`, if any.
    pub fn document_id(&self) -> Option<&str> {
        self.snapshot()?.get("_id")?.as_str()
    }
}

// ---------------------------------------------------------------------------
// Typed documents
// ---------------------------------------------------------------------------

/// Decode an optional field, treating `null` and shape mismatches as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode the event `type`. A value that is not a string is unrecognized,
/// so the event passes through untouched.
fn lenient_kind<'de, D>(deserializer: D) -> Result<EventKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = lenient(deserializer)?;
    Ok(raw.map(EventKind::from).unwrap_or_default())
}

/// Decode a snapshot into a typed document. Non-object input yields the
/// all-absent default.
fn decode<T: DeserializeOwned + Default>(snapshot: &Value) -> T {
    T::deserialize(snapshot).unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "_ref")]
    pub id: DocumentId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    #[serde(default, deserialize_with = "lenient")]
    pub calories: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub protein: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub carbs: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub fat: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub sodium: Option<f64>,
}

impl NutritionFacts {
    /// Every field that is present, paired with its name.
    pub fn present_fields(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("sodium", self.sodium),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PimMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub sync_source: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sync_status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_synced_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub validation_errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: Option<DocumentId>,
    #[serde(default, deserialize_with = "lenient")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub base_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub allergens: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub nutrition_facts: Option<NutritionFacts>,
    #[serde(default, deserialize_with = "lenient")]
    pub pim_product_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub pim_metadata: Option<PimMetadata>,
}

impl ProductDocument {
    pub fn from_snapshot(snapshot: &Value) -> Self {
        decode(snapshot)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingDocument {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: Option<DocumentId>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub product: Option<Reference>,
    #[serde(default, deserialize_with = "lenient")]
    pub store_location: Option<Reference>,
    #[serde(default, deserialize_with = "lenient")]
    pub pricing_tier: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub effective_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub expiration_date: Option<String>,
}

impl PricingDocument {
    pub fn from_snapshot(snapshot: &Value) -> Self {
        decode(snapshot)
    }
}

/// The identifying subset of any document that flows through the audit trail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncableDocument {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: Option<DocumentId>,
    #[serde(rename = "_type", default, deserialize_with = "lenient")]
    pub doc_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub pim_metadata: Option<PimMetadata>,
}

impl SyncableDocument {
    pub fn from_snapshot(snapshot: &Value) -> Self {
        decode(snapshot)
    }

    pub fn sync_source(&self) -> Option<&str> {
        self.pim_metadata.as_ref()?.sync_source.as_deref()
    }

    pub fn sync_status(&self) -> Option<&str> {
        self.pim_metadata.as_ref()?.sync_status.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
