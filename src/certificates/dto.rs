use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::certificates::repo::Certificate;

#[derive(Debug, Deserialize)]
pub struct CertificateRequest {
    pub path_id: String,
}

/// Generation response: the certificate fields flattened in, plus the
/// id echo and constructed download/share URLs.
#[derive(Debug, Serialize)]
pub struct CertificateResponse {
    pub certificate_id: Uuid,
    pub download_url: String,
    pub share_url: String,
    #[serde(flatten)]
    pub certificate: Certificate,
}

impl CertificateResponse {
    pub fn new(certificate: Certificate) -> Self {
        Self {
            certificate_id: certificate.id,
            download_url: format!("/api/certificate/download/{}", certificate.id),
            share_url: format!("/certificate/{}", certificate.id),
            certificate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;
    use time::OffsetDateTime;

    #[test]
    fn response_flattens_certificate_and_builds_urls() {
        let cert = Certificate {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            user_name: "Ada".into(),
            path_id: "backend-developer".into(),
            path_name: "Backend Developer".into(),
            completion_date: OffsetDateTime::now_utc(),
            total_milestones: 5,
            achievements: Json(vec!["first_step".into(), "path_master".into()]),
        };
        let id = cert.id;
        let json = serde_json::to_value(CertificateResponse::new(cert)).unwrap();

        assert_eq!(json["certificate_id"], id.to_string());
        assert_eq!(
            json["download_url"],
            format!("/api/certificate/download/{id}")
        );
        assert_eq!(json["share_url"], format!("/certificate/{id}"));
        // Flattened certificate fields sit at the top level.
        assert_eq!(json["user_name"], "Ada");
        assert_eq!(json["total_milestones"], 5);
    }
}
