use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors};

pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) =
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    let payload = json!({
                        "error": "Invalid JSON",
                        "message": rejection.body_text(),
                    });
                    (rejection.status(), axum::Json(payload))
                })?;

        json_value.validate().map_err(|validation_errors| {
            let payload = json!({
                "error": "Validation failed",
                "message": format_validation_errors(&validation_errors),
                "details": format_validation_errors_detailed(&validation_errors)
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload))
        })?;

        Ok(Self(json_value))
    }
}

fn error_message(field: &str, code: &str, message: Option<&str>) -> String {
    message.map(str::to_owned).unwrap_or_else(|| match code {
        "email" => "Invalid email format".to_string(),
        "length" => "Invalid length".to_string(),
        "range" => "Value out of range".to_string(),
        _ => format!("Invalid {field}"),
    })
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut error_messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error_message(
                &field,
                error.code.as_ref(),
                error.message.as_deref(),
            );
            error_messages.push(format!("{field}: {message}"));
        }
    }

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.join("; ")
    }
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| error_message(&field, e.code.as_ref(), e.message.as_deref()))
            .collect();
        error_map.insert(field.to_string(), json!(messages));
    }

    json!(error_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, Validate)]
    struct Probe {
        #[validate(range(min = 1, message = "Quantity must be at least 1"))]
        quantity: i32,
    }

    #[test]
    fn messages_are_prefixed_with_the_field_name() {
        let probe = Probe { quantity: 0 };
        let errors = probe.validate().unwrap_err();

        let formatted = format_validation_errors(&errors);
        assert_eq!(formatted, "quantity: Quantity must be at least 1");

        let detailed = format_validation_errors_detailed(&errors);
        assert_eq!(detailed["quantity"][0], "Quantity must be at least 1");
    }
}
