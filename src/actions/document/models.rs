// Arguments of the document existence check and their mapping onto a request.

use crate::core::error::ApiError;
use crate::core::transport::RequestDescriptor;
use crate::core::utils::escaped_path;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

/// Document type meaning "any type".
pub const ALL_TYPES: &str = "_all";

/// Query parameters forwarded to the cluster, in the order they are sent.
pub const EXISTS_PARAMS: [&str; 5] = ["parent", "preference", "realtime", "refresh", "routing"];

/// Arguments for [`Client::exists`](crate::Client::exists).
///
/// `index` and `id` are required; `doc_type` defaults to [`ALL_TYPES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistsParams {
    pub index: String,
    pub id: String,
    pub doc_type: Option<String>,
    /// ID of the parent document.
    pub parent: Option<String>,
    /// Node or shard the operation should run on (default: random).
    pub preference: Option<String>,
    /// Realtime (`true`) or search (`false`) mode.
    pub realtime: Option<bool>,
    /// Refresh the shard holding the document first.
    pub refresh: Option<bool>,
    pub routing: Option<String>,
}

impl ExistsParams {
    pub fn new(index: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_preference(mut self, preference: impl Into<String>) -> Self {
        self.preference = Some(preference.into());
        self
    }

    pub fn with_realtime(mut self, realtime: bool) -> Self {
        self.realtime = Some(realtime);
        self
    }

    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = Some(refresh);
        self
    }

    pub fn with_routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = Some(routing.into());
        self
    }

    /// Fails on the first missing required argument, `id` before `index`.
    /// `.` and `..` are rejected in any segment: URL resolution would treat
    /// them as dot segments and address a different resource.
    pub fn validate(&self) -> Result<(), ApiError> {
        if is_blank(&self.id) {
            return Err(ApiError::missing("id"));
        }
        if is_blank(&self.index) {
            return Err(ApiError::missing("index"));
        }

        let segments = [
            ("id", self.id.as_str()),
            ("index", self.index.as_str()),
            ("type", self.doc_type()),
        ];
        for (field, value) in segments {
            if is_dot_segment(value) {
                return Err(ApiError::InvalidArgument(format!(
                    "Argument '{}' cannot be '{}'",
                    field, value
                )));
            }
        }
        Ok(())
    }

    pub fn doc_type(&self) -> &str {
        match self.doc_type.as_deref() {
            Some(t) if !is_blank(t) => t,
            _ => ALL_TYPES,
        }
    }

    /// `{index}/{type}/{id}`, each segment escaped.
    pub fn path(&self) -> String {
        escaped_path(&[self.index.as_str(), self.doc_type(), self.id.as_str()])
    }

    pub fn query_params(&self) -> Vec<(String, String)> {
        let values = [
            self.parent.clone(),
            self.preference.clone(),
            self.realtime.map(|b| b.to_string()),
            self.refresh.map(|b| b.to_string()),
            self.routing.clone(),
        ];

        EXISTS_PARAMS
            .iter()
            .zip(values)
            .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
            .collect()
    }

    /// Validates and builds the `HEAD` request.
    pub fn to_request(&self) -> Result<RequestDescriptor, ApiError> {
        self.validate()?;
        Ok(RequestDescriptor {
            method: Method::HEAD,
            path: self.path(),
            params: self.query_params(),
            body: None,
        })
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn is_dot_segment(s: &str) -> bool {
    s == "." || s == ".."
}

// --- Dynamic argument map ---
// Unknown keys are ignored by serde, which gives the allow-list for free.

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Value of a required argument; `false` counts as absent.
    fn into_required(self, field: &str) -> Result<String, ApiError> {
        match self {
            Scalar::Bool(false) => Err(ApiError::missing(field)),
            other => Ok(other.into_string()),
        }
    }

    fn into_string(self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(n) => n.to_string(),
            Scalar::UInt(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Str(s) => s,
        }
    }

    fn into_bool(self, field: &str) -> Result<bool, ApiError> {
        match self {
            Scalar::Bool(b) => Ok(b),
            Scalar::Str(s) if s == "true" => Ok(true),
            Scalar::Str(s) if s == "false" => Ok(false),
            other => Err(ApiError::InvalidArgument(format!(
                "Argument '{}' must be a boolean, got {:?}",
                field, other
            ))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ExistsArguments {
    id: Option<Scalar>,
    index: Option<Scalar>,
    #[serde(rename = "type")]
    doc_type: Option<Scalar>,
    parent: Option<Scalar>,
    preference: Option<Scalar>,
    realtime: Option<Scalar>,
    refresh: Option<Scalar>,
    routing: Option<Scalar>,
}

impl TryFrom<Value> for ExistsParams {
    type Error = ApiError;

    /// Builds params from a JSON object such as
    /// `{"index": "myindex", "type": "mytype", "id": 1, "routing": "u1"}`.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(ApiError::InvalidArgument(
                "Arguments must be a JSON object".to_string(),
            ));
        }

        let args: ExistsArguments = serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidArgument(format!("Invalid arguments: {}", e)))?;

        let id = args
            .id
            .ok_or_else(|| ApiError::missing("id"))?
            .into_required("id")?;
        let index = args
            .index
            .ok_or_else(|| ApiError::missing("index"))?
            .into_required("index")?;

        let params = ExistsParams {
            index,
            id,
            doc_type: args.doc_type.map(Scalar::into_string),
            parent: args.parent.map(Scalar::into_string),
            preference: args.preference.map(Scalar::into_string),
            realtime: args.realtime.map(|v| v.into_bool("realtime")).transpose()?,
            refresh: args.refresh.map(|v| v.into_bool("refresh")).transpose()?,
            routing: args.routing.map(Scalar::into_string),
        };
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_type_path() {
        let params = ExistsParams::new("myindex", "1");
        assert_eq!(params.path(), "myindex/_all/1");
    }

    #[test]
    fn test_explicit_type_path() {
        let params = ExistsParams::new("myindex", "1").with_type("mytype");
        assert_eq!(params.path(), "myindex/mytype/1");
    }

    #[test]
    fn test_blank_type_falls_back_to_all() {
        let params = ExistsParams::new("myindex", "1").with_type(" ");
        assert_eq!(params.path(), "myindex/_all/1");
    }

    #[test]
    fn test_segments_are_escaped() {
        let params = ExistsParams::new("my index", "a/b?c").with_type("t&t");
        assert_eq!(params.path(), "my+index/t%26t/a%2Fb%3Fc");
    }

    #[test]
    fn test_query_params_keep_allow_list_order() {
        let params = ExistsParams::new("myindex", "1")
            .with_routing("user1")
            .with_refresh(true)
            .with_parent("p1");

        assert_eq!(
            params.query_params(),
            vec![
                ("parent".to_string(), "p1".to_string()),
                ("refresh".to_string(), "true".to_string()),
                ("routing".to_string(), "user1".to_string()),
            ]
        );
    }

    #[test]
    fn test_to_request() {
        let request = ExistsParams::new("myindex", "1")
            .with_realtime(false)
            .to_request()
            .unwrap();

        assert_eq!(request.method, Method::HEAD);
        assert_eq!(request.path, "myindex/_all/1");
        assert_eq!(request.param("realtime"), Some("false"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_missing_required_arguments() {
        let err = ExistsParams::new("myindex", "").to_request().unwrap_err();
        assert_eq!(err.to_string(), "Required argument 'id' missing");

        let err = ExistsParams::new("", "1").to_request().unwrap_err();
        assert_eq!(err.to_string(), "Required argument 'index' missing");

        // id is checked first
        let err = ExistsParams::default().validate().unwrap_err();
        assert_eq!(err.to_string(), "Required argument 'id' missing");
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        let err = ExistsParams::new("myindex", "..").to_request().unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(ref m) if m.contains("'id'")));

        let err = ExistsParams::new(".", "1").to_request().unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(ref m) if m.contains("'index'")));

        let err = ExistsParams::new("myindex", "1")
            .with_type("..")
            .to_request()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(ref m) if m.contains("'type'")));

        // Dots inside a segment are ordinary characters.
        let request = ExistsParams::new(".kibana", "a..b").to_request().unwrap();
        assert_eq!(request.path, ".kibana/_all/a..b");
    }

    #[test]
    fn test_from_arguments_drops_unknown_keys() {
        let params = ExistsParams::try_from(json!({
            "index": "myindex",
            "type": "mytype",
            "id": "1",
            "routing": "user1",
            "foo": "bar"
        }))
        .unwrap();

        assert_eq!(params.path(), "myindex/mytype/1");
        assert_eq!(
            params.query_params(),
            vec![("routing".to_string(), "user1".to_string())]
        );
    }

    #[test]
    fn test_from_arguments_accepts_numeric_id_and_string_booleans() {
        let params = ExistsParams::try_from(json!({
            "index": "myindex",
            "id": 42,
            "realtime": "false",
            "refresh": true
        }))
        .unwrap();

        assert_eq!(params.id, "42");
        assert_eq!(params.realtime, Some(false));
        assert_eq!(params.refresh, Some(true));
    }

    #[test]
    fn test_from_arguments_missing_fields() {
        let err = ExistsParams::try_from(json!({ "index": "myindex" })).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(ref m) if m.contains("'id'")));

        let err = ExistsParams::try_from(json!({ "id": "1", "index": null })).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(ref m) if m.contains("'index'")));

        let err = ExistsParams::try_from(json!({ "index": "myindex", "id": false })).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(ref m) if m.contains("'id'")));

        let err = ExistsParams::try_from(json!({ "index": false, "id": "1" })).unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(ref m) if m.contains("'index'")));
    }

    #[test]
    fn test_from_arguments_rejects_bad_shapes() {
        assert!(matches!(
            ExistsParams::try_from(json!(["myindex", "1"])),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(matches!(
            ExistsParams::try_from(json!({ "index": "myindex", "id": "1", "refresh": "yes" })),
            Err(ApiError::InvalidArgument(_))
        ));
        assert!(matches!(
            ExistsParams::try_from(json!({ "index": ["a", "b"], "id": "1" })),
            Err(ApiError::InvalidArgument(_))
        ));
    }
}
