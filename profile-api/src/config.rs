use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub keycloak_url: String,
    pub keycloak_realm: String,
    pub idp_client_id: String,
    pub idp_client_secret: String,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            keycloak_url: env::var("KEYCLOAK_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            keycloak_realm: env::var("KEYCLOAK_REALM").unwrap_or_else(|_| "master".into()),
            idp_client_id: env::var("IDP_CLIENT_ID").expect("IDP_CLIENT_ID must be set"),
            idp_client_secret: env::var("IDP_CLIENT_SECRET")
                .expect("IDP_CLIENT_SECRET must be set"),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".into()),
            mongodb_database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "profile".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()
                .expect("Invalid PORT"),
        }
    }
}
