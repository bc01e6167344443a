use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Server-side field error, as reported in the envelope's `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
	pub msg: String,
	pub param: String,
	pub location: String,
}

/// The uniform envelope every endpoint responds with.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
	pub success: bool,
	#[serde(default)]
	pub data: Option<T>,
	#[serde(default)]
	pub message: Option<String>,
	#[serde(default)]
	pub errors: Option<Vec<ValidationError>>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApiError {
	#[error("request failed: {0}")]
	Transport(String),
	#[error("invalid json: {body:?}\nError: {detail}")]
	Decode { body: String, detail: String },
	#[error("{message}")]
	Api {
		message: String,
		errors: Vec<ValidationError>,
	},
}
impl From<reqwest::Error> for ApiError {
	fn from(value: reqwest::Error) -> Self {
		Self::Transport(value.to_string())
	}
}
impl ApiError {
	/// The server's message when there is one, otherwise the caller's
	/// fallback. Mirrors how views phrase transient failure notices.
	pub fn message_or(&self, fallback: &str) -> String {
		match self {
			Self::Api { message, .. } if !message.is_empty() => message.clone(),
			_ => fallback.to_owned(),
		}
	}
}

impl<T> ApiResponse<T> {
	fn failure(self) -> ApiError {
		ApiError::Api {
			message: self.message.unwrap_or_default(),
			errors: self.errors.unwrap_or_default(),
		}
	}
}

pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_query<Q>(mut self, query: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.query(query);
		self
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	async fn envelope(self) -> Result<ApiResponse<T>, ApiError> {
		let response: reqwest::Response = self.builder.send().await?;
		let text = response.text().await?;
		match serde_json::from_str(&text) {
			Ok(envelope) => Ok(envelope),
			Err(err) => Err(ApiError::Decode {
				body: text,
				detail: err.to_string(),
			}),
		}
	}

	/// Unwrap the envelope, requiring `data` to be present.
	pub async fn send(self) -> Result<T, ApiError> {
		let envelope = self.envelope().await?;
		if !envelope.success {
			return Err(envelope.failure());
		}
		match envelope.data {
			Some(data) => Ok(data),
			None => Err(ApiError::Decode {
				body: String::new(),
				detail: "successful response carried no data".to_owned(),
			}),
		}
	}

	/// Unwrap the envelope where `data` may legitimately be absent
	/// (unknown id, empty profile).
	pub async fn send_opt(self) -> Result<Option<T>, ApiError> {
		let envelope = self.envelope().await?;
		if !envelope.success {
			return Err(envelope.failure());
		}
		Ok(envelope.data)
	}
}

impl Response<serde_json::Value> {
	/// Check the envelope for success and discard any payload. Deletes
	/// respond this way.
	pub async fn send_ok(self) -> Result<(), ApiError> {
		let envelope = self.envelope().await?;
		if !envelope.success {
			return Err(envelope.failure());
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn envelope_decodes_success_with_data() {
		let envelope: ApiResponse<Vec<u32>> =
			serde_json::from_str(r#"{"success": true, "data": [1, 2, 3]}"#).unwrap();
		assert!(envelope.success);
		assert_eq!(envelope.data, Some(vec![1, 2, 3]));
		assert!(envelope.message.is_none());
	}

	#[test]
	fn envelope_failure_carries_server_message() {
		let envelope: ApiResponse<Vec<u32>> = serde_json::from_str(
			r#"{"success": false, "message": "Invalid credentials", "errors": [
				{"msg": "required", "param": "email", "location": "body"}
			]}"#,
		)
		.unwrap();
		let err = envelope.failure();
		match &err {
			ApiError::Api { message, errors } => {
				assert_eq!(message, "Invalid credentials");
				assert_eq!(errors.len(), 1);
				assert_eq!(errors[0].param, "email");
			}
			other => panic!("unexpected error: {other:?}"),
		}
		assert_eq!(err.message_or("fallback"), "Invalid credentials");
	}

	#[test]
	fn message_or_falls_back_for_non_api_errors() {
		let err = ApiError::Transport("connection refused".into());
		assert_eq!(err.message_or("Failed to save"), "Failed to save");
		let empty = ApiError::Api {
			message: String::new(),
			errors: Vec::new(),
		};
		assert_eq!(empty.message_or("Failed to save"), "Failed to save");
	}
}
