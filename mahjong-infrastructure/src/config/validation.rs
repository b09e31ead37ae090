use anyhow::{anyhow, Result};

pub fn validate_http_uri(name: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("{} is empty", name));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(anyhow!("{} must start with http:// or https://", name));
    }
    Ok(())
}

pub fn validate_mongodb_uri(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("mongodb_uri is empty"));
    }
    if !(trimmed.starts_with("mongodb://") || trimmed.starts_with("mongodb+srv://")) {
        return Err(anyhow!("mongodb_uri must start with mongodb:// or mongodb+srv://"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_uri_requires_scheme() {
        assert!(validate_http_uri("gateway_uri", "https://gw.example").is_ok());
        assert!(validate_http_uri("gateway_uri", "gw.example").is_err());
        assert!(validate_http_uri("gateway_uri", " ").is_err());
    }

    #[test]
    fn mongodb_uri_accepts_srv() {
        assert!(validate_mongodb_uri("mongodb+srv://cluster0.example.net").is_ok());
        assert!(validate_mongodb_uri("mongodb://localhost:27017/").is_ok());
        assert!(validate_mongodb_uri("postgres://localhost").is_err());
    }
}
