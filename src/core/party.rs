use serde::Serialize;

use super::record::{self, Record};

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub street_number: String,
    pub city: String,
    pub zip_code: String,
    /// ISO 3166-1 alpha-2.
    pub country_code: String,
    /// Box or bus number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_box: Option<String>,
    /// Region / province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_subentity: Option<String>,
}

impl Address {
    pub fn from_record(data: &Record) -> Self {
        Self {
            street: record::text(data, &["street"]),
            street_number: record::text(data, &["streetNumber"]),
            city: record::text(data, &["city"]),
            zip_code: record::text(data, &["zipCode"]),
            country_code: record::text(data, &["countryCode"]),
            street_box: record::opt_text(data, &["streetBox"]),
            country_subentity: record::opt_text(data, &["countrySubentity"]),
        }
    }

    pub fn to_record(&self) -> Record {
        record::to_record(self)
    }
}

/// Invoice recipient.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer code in the seller's bookkeeping.
    pub code: String,
    pub name: String,
    pub email: String,
    /// VAT number, e.g. `BE0123456789`.
    pub vat_number: String,
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Customer {
    pub fn from_record(data: &Record) -> Self {
        Self {
            code: record::text(data, &["code"]),
            name: record::text(data, &["name", "customerName"]),
            email: record::text(data, &["email"]),
            vat_number: record::text(data, &["vatNumber"]),
            address: Address::from_record(&record::object(data, "address")),
            phone: record::opt_text(data, &["phone"]),
        }
    }

    pub fn to_record(&self) -> Record {
        record::to_record(self)
    }
}

/// Additional scheme-qualified identifier of a party.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ExtraIdentifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ExtraIdentifier {
    pub fn from_record(data: &Record) -> Self {
        Self {
            scheme: record::opt_text(data, &["scheme"]),
            value: record::opt_text(data, &["value"]),
        }
    }

    pub fn to_record(&self) -> Record {
        record::to_record(self)
    }
}

/// Builder for [`Address`].
pub struct AddressBuilder {
    street: String,
    street_number: String,
    city: String,
    zip_code: String,
    country_code: String,
    street_box: Option<String>,
    country_subentity: Option<String>,
}

impl AddressBuilder {
    pub fn new(
        street: impl Into<String>,
        street_number: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            street_number: street_number.into(),
            city: city.into(),
            zip_code: zip_code.into(),
            country_code: country_code.into(),
            street_box: None,
            country_subentity: None,
        }
    }

    pub fn street_box(mut self, b: impl Into<String>) -> Self {
        self.street_box = Some(b.into());
        self
    }

    pub fn country_subentity(mut self, s: impl Into<String>) -> Self {
        self.country_subentity = Some(s.into());
        self
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street,
            street_number: self.street_number,
            city: self.city,
            zip_code: self.zip_code,
            country_code: self.country_code,
            street_box: self.street_box,
            country_subentity: self.country_subentity,
        }
    }
}

/// Builder for [`Customer`].
pub struct CustomerBuilder {
    code: String,
    name: String,
    email: String,
    vat_number: String,
    address: Address,
    phone: Option<String>,
}

impl CustomerBuilder {
    pub fn new(code: impl Into<String>, name: impl Into<String>, address: Address) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            email: String::new(),
            vat_number: String::new(),
            address,
            phone: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn vat_number(mut self, vat: impl Into<String>) -> Self {
        self.vat_number = vat.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn build(self) -> Customer {
        Customer {
            code: self.code,
            name: self.name,
            email: self.email,
            vat_number: self.vat_number,
            address: self.address,
            phone: self.phone,
        }
    }
}
