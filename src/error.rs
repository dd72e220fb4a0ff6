// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use thiserror::Error;

/// `Asn1Error` enumerates the error conditions callers of the ASN.1 surface
/// are written to handle.
///
/// This crate never returns it. The type exists so that code written against
/// the full OpenSSL-backed implementation can keep naming, matching on, and
/// propagating the error when that implementation is absent.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Asn1Error {
    /// No ASN.1 backend is compiled into this build.
    #[error("OpenSSL ASN1 implementation unavailable")]
    Unavailable,
}

/// A specialized `Result` type for ASN.1 operations.
pub type Result<T> = std::result::Result<T, Asn1Error>;
