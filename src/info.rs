//! Document metadata: [`Info`], [`Contact`] and [`License`].

use crate::Extensions;

/// License name treated as "no license" and elided from output.
pub const UNLICENSED: &str = "UNLICENSED";

builder! {
    InfoBuilder;

    /// Metadata of the API document.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct Info {
        /// Title of the API.
        pub title: String,

        /// Version of the API document, e.g. `1.0.0`.
        pub version: String,

        /// Longer description of the API.
        pub description: Option<String>,

        /// URL of the terms of service.
        pub terms_of_service: Option<String>,

        /// Contact information of the API owner.
        pub contact: Option<Contact>,

        /// License under which the API is provided.
        pub license: Option<License>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl Info {
    /// Construct a new [`Info`] with the required title and version.
    pub fn new<T: Into<String>, V: Into<String>>(title: T, version: V) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            ..Default::default()
        }
    }
}

impl InfoBuilder {
    /// Set the title of the API.
    pub fn title<I: Into<String>>(mut self, title: I) -> Self {
        set_value!(self title title.into())
    }

    /// Set the version of the API document.
    pub fn version<I: Into<String>>(mut self, version: I) -> Self {
        set_value!(self version version.into())
    }

    /// Set the description of the API.
    pub fn description<S: Into<String>>(mut self, description: Option<S>) -> Self {
        set_value!(self description description.map(Into::into))
    }

    /// Set the URL of the terms of service.
    pub fn terms_of_service<S: Into<String>>(mut self, terms_of_service: Option<S>) -> Self {
        set_value!(self terms_of_service terms_of_service.map(Into::into))
    }

    /// Set the contact information.
    pub fn contact(mut self, contact: Option<Contact>) -> Self {
        set_value!(self contact contact)
    }

    /// Set the license.
    pub fn license(mut self, license: Option<License>) -> Self {
        set_value!(self license license)
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

builder! {
    ContactBuilder;

    /// Contact information of the API owner.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct Contact {
        /// Name of the contact person or organisation.
        pub name: Option<String>,

        /// URL pointing to contact information.
        pub url: Option<String>,

        /// Email address of the contact.
        pub email: Option<String>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl Contact {
    crate::new!(pub Contact);

    /// Whether no field of the contact is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none() && self.email.is_none() && self.extensions.is_empty()
    }
}

impl ContactBuilder {
    /// Set the name of the contact.
    pub fn name<S: Into<String>>(mut self, name: Option<S>) -> Self {
        set_value!(self name name.map(Into::into))
    }

    /// Set the URL of the contact.
    pub fn url<S: Into<String>>(mut self, url: Option<S>) -> Self {
        set_value!(self url url.map(Into::into))
    }

    /// Set the email of the contact.
    pub fn email<S: Into<String>>(mut self, email: Option<S>) -> Self {
        set_value!(self email email.map(Into::into))
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

builder! {
    LicenseBuilder;

    /// License information of the API.
    #[derive(Debug, Default, Clone, PartialEq)]
    #[non_exhaustive]
    pub struct License {
        /// Name of the license, e.g. `MIT`. The sentinel value
        /// [`UNLICENSED`] is omitted from serialized output.
        pub name: String,

        /// URL of the full license text.
        pub url: Option<String>,

        /// Additional `x-` prefixed fields.
        pub extensions: Extensions,
    }
}

impl License {
    /// Construct a new [`License`] with the given name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl LicenseBuilder {
    /// Set the name of the license.
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        set_value!(self name name.into())
    }

    /// Set the URL of the full license text.
    pub fn url<S: Into<String>>(mut self, url: Option<S>) -> Self {
        set_value!(self url url.map(Into::into))
    }

    /// Set additional `x-` prefixed fields.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        set_value!(self extensions extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_builder_chains() {
        let info = InfoBuilder::new()
            .title("Orders API")
            .version("2.1.0")
            .description(Some("Order management"))
            .license(Some(License::new("MIT")))
            .build();

        assert_eq!(info.title, "Orders API");
        assert_eq!(info.version, "2.1.0");
        assert_eq!(info.license.unwrap().name, "MIT");
    }

    #[test]
    fn empty_contact_detected() {
        assert!(Contact::new().is_empty());
        assert!(!ContactBuilder::new().email(Some("a@b.c")).build().is_empty());
    }
}
