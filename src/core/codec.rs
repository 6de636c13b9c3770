//! Codec module - Decodifica stretta dei body JSON e scrittura uniforme delle risposte
//!
//! I DTO decodificati con `decode_body`/`StrictJson` devono dichiarare
//! `#[serde(deny_unknown_fields)]`: i campi sconosciuti diventano un 400.

use crate::core::error::AppError;
use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::json;
use tracing::{error, warn};

/// Decodifica `body` in `T`. Errori di sintassi, tipi sbagliati e campi
/// sconosciuti producono un `BadRequest` con il percorso del campo nei dettagli.
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    Json::<T>::from_bytes(body)
        .map(|Json(value)| value)
        .map_err(|rejection| {
            let details = rejection.body_text();
            warn!("Rejected request body: {}", details);
            AppError::bad_request("Bad Request").with_details(details)
        })
}

/// Extractor equivalente a `Json<T>` ma con gli errori mappati su `AppError` (sempre 400)
/// e senza controllo sul Content-Type.
#[derive(Debug, Clone)]
pub struct StrictJson<T>(pub T);

impl<S, T> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            AppError::bad_request("Bad Request").with_details(rejection.body_text())
        })?;
        decode_body(&bytes).map(StrictJson)
    }
}

/// Risposta `{"message": message}` con lo status indicato.
pub fn handle_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

/// Serializza `object` direttamente come body (nessun envelope).
/// Un errore di serializzazione viene loggato e ritornato come 500.
pub fn handle_response_with_object<T: Serialize + ?Sized>(
    status: StatusCode,
    object: &T,
) -> Result<Response, AppError> {
    let body = serde_json::to_vec(object).map_err(|e| {
        error!("Failed to serialize response object: {}", e);
        AppError::internal_server_error("Failed to serialize response").with_details(e.to_string())
    })?;

    Ok((
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct Enrollment {
        module_id: i32,
        student_id: i32,
        note: Option<String>,
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_decode_rejects_unknown_field() {
        let body = br#"{"module_id": 1, "student_id": 2, "grade": "A"}"#;
        let err = decode_body::<Enrollment>(body).unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.details().unwrap().contains("grade"));
    }

    #[test]
    fn test_decode_names_mistyped_field() {
        let body = br#"{"module_id": "uno", "student_id": 2}"#;
        let err = decode_body::<Enrollment>(body).unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.details().unwrap().contains("module_id"));
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let err = decode_body::<Enrollment>(b"{\"module_id\": 1,").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_decode_exact_shape_round_trips() {
        let body = br#"{"module_id":4,"student_id":8,"note":"late"}"#;
        let decoded = decode_body::<Enrollment>(body).unwrap();

        assert_eq!(
            decoded,
            Enrollment {
                module_id: 4,
                student_id: 8,
                note: Some("late".to_string()),
            }
        );
        let reencoded = serde_json::to_vec(&decoded).unwrap();
        assert_eq!(decode_body::<Enrollment>(&reencoded).unwrap(), decoded);
    }

    #[tokio::test]
    async fn test_handle_response_writes_message_envelope() {
        let response = handle_response(StatusCode::OK, "ok");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_string(response).await, r#"{"message":"ok"}"#);
    }

    #[tokio::test]
    async fn test_handle_response_with_object_has_no_envelope() {
        let object = Enrollment {
            module_id: 1,
            student_id: 2,
            note: None,
        };
        let response = handle_response_with_object(StatusCode::CREATED, &object).unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_string(response).await,
            r#"{"module_id":1,"student_id":2,"note":null}"#
        );
    }

    #[test]
    fn test_serialization_failure_becomes_500() {
        // le chiavi non stringa non sono rappresentabili in JSON
        let object: HashMap<(i32, i32), i32> = HashMap::from([((1, 2), 3)]);
        let err = handle_response_with_object(StatusCode::OK, &object).unwrap_err();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
