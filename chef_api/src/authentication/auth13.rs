use crate::utils::{expand_string, squeeze_path};
use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use failure::Error;
use hyper::header::{HeaderMap, HeaderName, HeaderValue};
use itertools::Itertools;
use openssl::hash::{hash, MessageDigest};
use openssl::pkey::{PKey, Private};
use openssl::sign::Signer;
use std::convert::TryFrom;
use std::fmt;

const AUTHORIZATION_WIDTH: usize = 60;

/// Signature headers for one request under version 1.3 of the Chef
/// authentication protocol.
pub struct Auth13 {
    api_version: String,
    content_hash: String,
    key: PKey<Private>,
    method: String,
    path: String,
    timestamp: String,
    userid: String,
}

impl fmt::Debug for Auth13 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Auth13")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("userid", &self.userid)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

impl Auth13 {
    pub fn new(
        method: &str,
        path: &str,
        body: Option<String>,
        userid: &str,
        api_version: &str,
        key: &[u8],
    ) -> Result<Auth13, Error> {
        Auth13::at(method, path, body, userid, api_version, key, Utc::now())
    }

    fn at(
        method: &str,
        path: &str,
        body: Option<String>,
        userid: &str,
        api_version: &str,
        key: &[u8],
        when: DateTime<Utc>,
    ) -> Result<Auth13, Error> {
        Ok(Auth13 {
            api_version: api_version.into(),
            content_hash: content_hash(&body)?,
            key: PKey::private_key_from_pem(key)?,
            method: method.to_ascii_uppercase(),
            path: squeeze_path(path),
            timestamp: when.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            userid: userid.into(),
        })
    }

    fn canonical_request(&self) -> String {
        let cr = format!(
            "Method:{}\nPath:{}\nX-Ops-Content-Hash:{}\n\
             X-Ops-Sign:version=1.3\nX-Ops-Timestamp:{}\n\
             X-Ops-UserId:{}\nX-Ops-Server-API-Version:{}",
            self.method,
            self.path,
            self.content_hash,
            self.timestamp,
            self.userid,
            self.api_version
        );
        debug!("Canonical Request is: {:?}", cr);
        cr
    }

    fn signature(&self) -> Result<String, Error> {
        let mut signer = Signer::new(MessageDigest::sha256(), &self.key)?;
        signer.update(self.canonical_request().as_bytes())?;
        Ok(general_purpose::STANDARD.encode(signer.sign_to_vec()?))
    }

    /// Write the `X-Ops-*` headers, splitting the signature across numbered
    /// `X-Ops-Authorization-N` headers.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<(), Error> {
        headers.insert(
            "X-Ops-Content-Hash",
            HeaderValue::from_str(&self.content_hash)?,
        );
        headers.insert(
            "X-Ops-Sign",
            HeaderValue::from_static("algorithm=sha256;version=1.3"),
        );
        headers.insert("X-Ops-Timestamp", HeaderValue::from_str(&self.timestamp)?);
        headers.insert("X-Ops-Userid", HeaderValue::from_str(&self.userid)?);

        let signature = self.signature()?;
        let chunks = signature.bytes().chunks(AUTHORIZATION_WIDTH);
        for (i, chunk) in chunks.into_iter().enumerate() {
            let name = HeaderName::try_from(format!("X-Ops-Authorization-{}", i + 1))?;
            let value = HeaderValue::from_bytes(&chunk.collect::<Vec<_>>())?;
            headers.insert(name, value);
        }
        Ok(())
    }
}

fn content_hash(body: &Option<String>) -> Result<String, Error> {
    let digest = hash(MessageDigest::sha256(), expand_string(body).as_bytes())?;
    Ok(general_purpose::STANDARD.encode(digest))
}

#[cfg(test)]
mod tests {
    use super::{content_hash, Auth13};

    use base64::{engine::general_purpose, Engine as _};
    use chrono::{TimeZone, Utc};
    use hyper::header::HeaderMap;
    use openssl::hash::MessageDigest;
    use openssl::pkey::PKey;
    use openssl::sign::Verifier;
    use std::fs;

    const PATH: &str = "/organizations/clownco//search/node/";
    const USER: &str = "spec-user";
    const PRIVATE_KEY: &str = "fixtures/spec-client.pem";

    const SIGNATURE: &str = "H+JQBy0Dmnef8f7dOWr4K2At7eXkKsM2CfRwzYz+d6yQRGue+eDTRurwPopsvzHX\
         rqZnoDyj3rc695FfWq22TLsflMiXcMLwSRT6sRUxhkbl9rf1KdMlJBwlJcsq1exb\
         KWMCx7OlkgbmVKU/CElYqPN3NX3U/mLahUIQpI9qtPs1etUIeUgPqU5HMYLcb1AU\
         8zzDkeArv1mLuZ9vgfaLZNgmckSr7s+DuHJRM+7LLLkzfXyo6l1+W/F59frkxiQ+\
         fFqy/X7DdqyVLW3DlUas9PPWa++B4v/ZvNwk/WhEn/HJeUqx8GTkqDujaFhr9S2Q\
         xMuZjmxUyclOGvIYLPFu3w==";

    fn key_data() -> Vec<u8> {
        fs::read(PRIVATE_KEY).unwrap()
    }

    fn search_request() -> Auth13 {
        let when = Utc.with_ymd_and_hms(2009, 1, 1, 12, 0, 0).unwrap();
        Auth13::at("get", PATH, None, USER, "1", &key_data(), when).unwrap()
    }

    #[test]
    fn test_content_hash() {
        assert_eq!(
            content_hash(&Some(String::from("Spec Body"))).unwrap(),
            "hDlKNZhIhgso3Fs0S0pZwJ0xyBWtR1RBaeHs1DrzOho="
        );
        assert_eq!(
            content_hash(&None).unwrap(),
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
    }

    #[test]
    fn test_canonical_request() {
        assert_eq!(
            search_request().canonical_request(),
            "Method:GET\nPath:/organizations/clownco/search/node\nX-Ops-Content-Hash:\
             47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=\nX-Ops-Sign:version=1.\
             3\nX-Ops-Timestamp:2009-01-01T12:00:00Z\nX-Ops-UserId:\
             spec-user\nX-Ops-Server-API-Version:1"
        )
    }

    #[test]
    fn test_signature() {
        let auth = search_request();
        let sig = auth.signature().unwrap();
        assert_eq!(sig, SIGNATURE);

        let key = PKey::private_key_from_pem(&key_data()).unwrap();
        let mut ver = Verifier::new(MessageDigest::sha256(), &key).unwrap();
        ver.update(auth.canonical_request().as_bytes()).unwrap();
        let raw = general_purpose::STANDARD.decode(&sig).unwrap();
        assert!(ver.verify(&raw).unwrap());
    }

    #[test]
    fn test_authorization_headers() {
        let auth = search_request();
        let mut headers = HeaderMap::new();
        auth.apply(&mut headers).unwrap();

        assert_eq!(headers["X-Ops-Userid"], "spec-user");
        assert_eq!(headers["X-Ops-Timestamp"], "2009-01-01T12:00:00Z");
        assert_eq!(headers["X-Ops-Sign"], "algorithm=sha256;version=1.3");

        let mut joined = String::new();
        let mut i = 1;
        while let Some(value) = headers.get(format!("X-Ops-Authorization-{}", i).as_str()) {
            let value = value.to_str().unwrap();
            assert!(value.len() <= 60);
            joined.push_str(value);
            i += 1;
        }
        assert_eq!(i, 7);
        assert_eq!(joined, auth.signature().unwrap());
    }

    #[test]
    fn test_rejects_bad_key() {
        assert!(Auth13::new("GET", "/", None, USER, "1", b"not a key").is_err());
    }
}
