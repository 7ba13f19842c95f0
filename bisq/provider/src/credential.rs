// Copyright 2022-2023 Protocol Labs
// SPDX-License-Identifier: MIT
//! Password authentication against the daemon's API.

use std::fmt::{Debug, Formatter};

use tonic::metadata::{Ascii, MetadataValue};
use tonic::service::Interceptor;
use tonic::{Request, Status};

use crate::error::ClientError;

/// The metadata key the daemon reads the API password from.
pub const PASSWORD_METADATA_KEY: &str = "password";

/// The API password. Must match `apiPassword=...` in the daemon's `bisq.properties`.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordCredential(String);

impl PasswordCredential {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// The daemon listens on plaintext local connections, so no TLS is required.
    pub fn require_transport_security(&self) -> bool {
        false
    }

    /// Builds the interceptor that attaches the password to every outgoing call.
    ///
    /// Only printable ascii and spaces can travel in a metadata value.
    pub fn interceptor(&self) -> Result<PasswordInterceptor, ClientError> {
        if !self.0.bytes().all(|b| b.is_ascii_graphic() || b == b' ') {
            return Err(ClientError::InvalidCredential);
        }

        let mut value: MetadataValue<Ascii> = self
            .0
            .as_str()
            .try_into()
            .map_err(|_| ClientError::InvalidCredential)?;
        value.set_sensitive(true);
        Ok(PasswordInterceptor { value })
    }
}

impl Debug for PasswordCredential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordCredential(***)")
    }
}

#[derive(Clone)]
pub struct PasswordInterceptor {
    value: MetadataValue<Ascii>,
}

impl Interceptor for PasswordInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        request
            .metadata_mut()
            .insert(PASSWORD_METADATA_KEY, self.value.clone());
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use tonic::service::Interceptor;
    use tonic::Request;

    use super::{PasswordCredential, PASSWORD_METADATA_KEY};
    use crate::error::ClientError;

    #[test]
    fn attaches_password_metadata() {
        let mut interceptor = PasswordCredential::new("xyz").interceptor().unwrap();
        let request = interceptor.call(Request::new(())).unwrap();

        let value = request.metadata().get(PASSWORD_METADATA_KEY).unwrap();
        assert_eq!(value.to_str().unwrap(), "xyz");
    }

    #[test]
    fn rejects_non_ascii_password() {
        let r = PasswordCredential::new("pässwort").interceptor();
        assert!(matches!(r, Err(ClientError::InvalidCredential)));
    }

    #[test]
    fn rejects_control_characters() {
        for password in ["line\nbreak", "tab\there", "del\u{7f}"] {
            let r = PasswordCredential::new(password).interceptor();
            assert!(matches!(r, Err(ClientError::InvalidCredential)));
        }
        assert!(PasswordCredential::new("with space ~!").interceptor().is_ok());
    }

    #[test]
    fn debug_hides_password() {
        let credential = PasswordCredential::new("xyz");
        assert!(!format!("{credential:?}").contains("xyz"));
        assert!(!credential.require_transport_security());
    }
}
