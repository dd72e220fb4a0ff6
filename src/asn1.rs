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

//! Placeholder ASN.1 value types and the unavailability diagnostic.
//!
//! The three types here carry no state and implement no ASN.1 behavior.
//! They exist so that name references elsewhere in a larger system resolve
//! when the real implementation is absent.

use std::sync::Once;

use log::warn;

/// First line of the diagnostic emitted when this shim stands in for the
/// real implementation. Diagnostic tooling that matches on the message
/// should reference this constant rather than restating the text.
pub const UNAVAILABLE_WARNING: &str = "OpenSSL ASN1 implementation unavailable";

/// Second line of the diagnostic, naming the package that provides full
/// support.
pub const INSTALL_HINT: &str = "gem install bouncy-castle-java for full support.";

static WARN_ONCE: Once = Once::new();

/// Emits the shim diagnostics at `warn` level via the [`log`] facade.
///
/// The first call logs [`UNAVAILABLE_WARNING`] and [`INSTALL_HINT`], in
/// that order; every later call is a no-op, from any thread. Constructing
/// any placeholder type routes through this function, so the lines appear
/// before the first placeholder value exists. Hosts that want the
/// diagnostic earlier can call it directly:
///
/// ```
/// env_logger::builder().is_test(true).try_init().ok();
/// asn1_shim::asn1::warn_unavailable();
/// ```
pub fn warn_unavailable() {
    WARN_ONCE.call_once(|| {
        warn!("{UNAVAILABLE_WARNING}");
        warn!("{INSTALL_HINT}");
    });
}

/// Placeholder for an arbitrary ASN.1 value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Asn1Data;

impl Asn1Data {
    /// Creates an empty placeholder value.
    pub fn new() -> Self {
        warn_unavailable();
        Self
    }
}

impl Default for Asn1Data {
    fn default() -> Self {
        Self::new()
    }
}

/// Placeholder for a primitive ASN.1 value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Primitive;

impl Primitive {
    /// Creates an empty placeholder value.
    pub fn new() -> Self {
        warn_unavailable();
        Self
    }
}

impl Default for Primitive {
    fn default() -> Self {
        Self::new()
    }
}

/// Placeholder for a constructed (composite) ASN.1 value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Constructive;

impl Constructive {
    /// Creates an empty placeholder value.
    pub fn new() -> Self {
        warn_unavailable();
        Self
    }
}

impl Default for Constructive {
    fn default() -> Self {
        Self::new()
    }
}
