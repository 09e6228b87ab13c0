/// A URL-encoded form POST.
///
/// Fields keep their insertion order and may repeat, since the remote forms
/// rely on repeated `name[]` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    pub url: String,
    pub fields: Vec<(String, String)>,
}

impl FormRequest {
    /// First value submitted under `name`
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every value submitted under `name`, in order
    pub fn fields_named(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

pub struct FormRequestBuilder {
    request: FormRequest,
}

impl FormRequestBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            request: FormRequest {
                url: url.into(),
                fields: Vec::new(),
            },
        }
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.fields.push((name.into(), value.into()));
        self
    }

    pub fn fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request
            .fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(self) -> FormRequest {
        self.request
    }
}
