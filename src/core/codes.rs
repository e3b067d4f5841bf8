//! Integer code lists used by the API: VAT types, units, file types and
//! party identifier schemes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Implements serde for an enum as its wire integer code.
macro_rules! int_code_serde {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u16(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = u16::deserialize(deserializer)?;
                Self::from_code(code).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "unknown {} code {code}",
                        stringify!($ty)
                    ))
                })
            }
        }
    };
}

/// Scrada VAT type, mapped to a box of the Belgian VAT declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VatType {
    /// 1: Standard rate (boxes 01, 02, 03).
    Standard,
    /// 2: Zero rate (box 00). Never produced by classification.
    ZeroRate,
    /// 3: Exempt, not on the VAT declaration. Domestic 0% lines.
    Exempt,
    /// 4: Intra-community services B2B, reverse charged (box 44).
    IcdServicesB2b,
    /// 5: Intra-community goods (box 46).
    IcdGoods,
    /// 6: ICD manufacturing cost (box 47).
    IcdManufacturing,
    /// 7: ICD assembly (box 47).
    IcdAssembly,
    /// 8: ICD distance sales (box 47).
    IcdDistance,
    /// 9: ICD services (box 47).
    IcdServices,
    /// 10: ICD triangular a-B-c (box 46).
    IcdTriangle,
    /// 20: Export outside the EU (box 47).
    ExportNonEu,
    /// 21: Indirect export (box 47).
    ExportIndirect,
    /// 22: Export via the EU (box 47).
    ExportViaEu,
    /// 50: Reverse charge / medecontractant (box 45).
    ReverseCharge,
    /// 51: Financial discount.
    FinancialDiscount,
    /// 52: 0% under article 44 (box 00).
    ZeroClause44,
    /// 53: Standard exchange (box 03).
    StandardExchange,
    /// 54: Margin scheme.
    Margin,
    /// 70: OSS goods.
    OssGoods,
    /// 71: OSS services.
    OssServices,
    /// 72: OSS import.
    OssImport,
}

impl VatType {
    pub const ALL: [VatType; 21] = [
        Self::Standard,
        Self::ZeroRate,
        Self::Exempt,
        Self::IcdServicesB2b,
        Self::IcdGoods,
        Self::IcdManufacturing,
        Self::IcdAssembly,
        Self::IcdDistance,
        Self::IcdServices,
        Self::IcdTriangle,
        Self::ExportNonEu,
        Self::ExportIndirect,
        Self::ExportViaEu,
        Self::ReverseCharge,
        Self::FinancialDiscount,
        Self::ZeroClause44,
        Self::StandardExchange,
        Self::Margin,
        Self::OssGoods,
        Self::OssServices,
        Self::OssImport,
    ];

    pub fn code(&self) -> u16 {
        match self {
            Self::Standard => 1,
            Self::ZeroRate => 2,
            Self::Exempt => 3,
            Self::IcdServicesB2b => 4,
            Self::IcdGoods => 5,
            Self::IcdManufacturing => 6,
            Self::IcdAssembly => 7,
            Self::IcdDistance => 8,
            Self::IcdServices => 9,
            Self::IcdTriangle => 10,
            Self::ExportNonEu => 20,
            Self::ExportIndirect => 21,
            Self::ExportViaEu => 22,
            Self::ReverseCharge => 50,
            Self::FinancialDiscount => 51,
            Self::ZeroClause44 => 52,
            Self::StandardExchange => 53,
            Self::Margin => 54,
            Self::OssGoods => 70,
            Self::OssServices => 71,
            Self::OssImport => 72,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard rate",
            Self::ZeroRate => "Zero rate",
            Self::Exempt => "Exempt from tax",
            Self::IcdServicesB2b => "ICD Services B2B",
            Self::IcdGoods => "ICD Goods",
            Self::IcdManufacturing => "ICD Manufacturing",
            Self::IcdAssembly => "ICD Assembly",
            Self::IcdDistance => "ICD Distance",
            Self::IcdServices => "ICD Services",
            Self::IcdTriangle => "ICD Triangle",
            Self::ExportNonEu => "Export non E.U.",
            Self::ExportIndirect => "Indirect export",
            Self::ExportViaEu => "Export via E.U.",
            Self::ReverseCharge => "Reverse charge",
            Self::FinancialDiscount => "Financial discount",
            Self::ZeroClause44 => "0% Clause 44",
            Self::StandardExchange => "Standard exchange",
            Self::Margin => "Margin scheme",
            Self::OssGoods => "OSS Goods",
            Self::OssServices => "OSS Services",
            Self::OssImport => "OSS Import",
        }
    }
}

int_code_serde!(VatType);

/// Unit of measure of an invoice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    Unit,
    Piece,
    Pallet,
    Container20ft,
    Container40ft,
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
    Week,
    Milligram,
    Gram,
    Kilogram,
    Ton,
    Meter,
    Kilometer,
    Liter,
    Milliliter,
}

impl UnitType {
    pub const ALL: [UnitType; 20] = [
        Self::Unit,
        Self::Piece,
        Self::Pallet,
        Self::Container20ft,
        Self::Container40ft,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Month,
        Self::Year,
        Self::Week,
        Self::Milligram,
        Self::Gram,
        Self::Kilogram,
        Self::Ton,
        Self::Meter,
        Self::Kilometer,
        Self::Liter,
        Self::Milliliter,
    ];

    pub fn code(&self) -> u16 {
        match self {
            Self::Unit => 1,
            Self::Piece => 2,
            Self::Pallet => 3,
            Self::Container20ft => 4,
            Self::Container40ft => 5,
            Self::Second => 100,
            Self::Minute => 101,
            Self::Hour => 102,
            Self::Day => 103,
            Self::Month => 104,
            Self::Year => 105,
            Self::Week => 106,
            Self::Milligram => 200,
            Self::Gram => 201,
            Self::Kilogram => 202,
            Self::Ton => 203,
            Self::Meter => 300,
            Self::Kilometer => 301,
            Self::Liter => 400,
            Self::Milliliter => 401,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unit => "Unit",
            Self::Piece => "Piece",
            Self::Pallet => "Pallet",
            Self::Container20ft => "Container 20ft",
            Self::Container40ft => "Container 40ft",
            Self::Second => "Second",
            Self::Minute => "Minute",
            Self::Hour => "Hour",
            Self::Day => "Day",
            Self::Month => "Month",
            Self::Year => "Year",
            Self::Week => "Week",
            Self::Milligram => "Milligram",
            Self::Gram => "Gram",
            Self::Kilogram => "Kilogram",
            Self::Ton => "Ton",
            Self::Meter => "Meter",
            Self::Kilometer => "Kilometer",
            Self::Liter => "Liter",
            Self::Milliliter => "Milliliter",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Unit => "ea",
            Self::Piece => "pc",
            Self::Pallet => "plt",
            Self::Container20ft => "20ft",
            Self::Container40ft => "40ft",
            Self::Second => "s",
            Self::Minute => "min",
            Self::Hour => "h",
            Self::Day => "d",
            Self::Month => "mo",
            Self::Year => "y",
            Self::Week => "wk",
            Self::Milligram => "mg",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Ton => "t",
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::Liter => "L",
            Self::Milliliter => "mL",
        }
    }
}

int_code_serde!(UnitType);

/// Attachment file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileType {
    #[default]
    Pdf,
    Image,
    Xml,
}

impl FileType {
    pub fn code(&self) -> u16 {
        match self {
            Self::Pdf => 1,
            Self::Image => 2,
            Self::Xml => 3,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(Self::Pdf),
            2 => Some(Self::Image),
            3 => Some(Self::Xml),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Image => "Image",
            Self::Xml => "XML",
        }
    }

    pub fn mime_types(&self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &["application/pdf"],
            Self::Image => &["image/png", "image/jpeg", "image/gif", "image/webp"],
            Self::Xml => &["application/xml", "text/xml"],
        }
    }

    /// Classify a MIME type by substring. Anything unrecognised is a PDF.
    pub fn from_mime_type(mime_type: &str) -> Self {
        if mime_type.contains("pdf") {
            Self::Pdf
        } else if mime_type.contains("image") {
            Self::Image
        } else if mime_type.contains("xml") {
            Self::Xml
        } else {
            Self::Pdf
        }
    }
}

int_code_serde!(FileType);

/// Company registration scheme of a party's tax number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxNumberType {
    /// 1: Ondernemingsnummer / numéro d'entreprise (BE).
    EnterpriseNumberBe,
    /// 2: Kamer van Koophandel (NL).
    KvkNl,
    /// 3: SIRENE (FR).
    SireneFr,
}

impl TaxNumberType {
    pub fn code(&self) -> u16 {
        match self {
            Self::EnterpriseNumberBe => 1,
            Self::KvkNl => 2,
            Self::SireneFr => 3,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(Self::EnterpriseNumberBe),
            2 => Some(Self::KvkNl),
            3 => Some(Self::SireneFr),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EnterpriseNumberBe => "Enterprise number (Belgium)",
            Self::KvkNl => "KvK number (Netherlands)",
            Self::SireneFr => "SIRENE (France)",
        }
    }

    /// ISO 3166-1 alpha-2 country issuing the number.
    pub fn country_code(&self) -> &'static str {
        match self {
            Self::EnterpriseNumberBe => "BE",
            Self::KvkNl => "NL",
            Self::SireneFr => "FR",
        }
    }
}

int_code_serde!(TaxNumberType);

/// Identification scheme for a company or an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemIdentificationType {
    EnterpriseNumberBe,
    KvkNl,
    SireneFr,
    /// 20: Global Location Number, 13 digits.
    Gln,
    /// 21: GTIN, 8, 12, 13 or 14 digits.
    Gtin,
    /// 22: GS1 key, 8 to 20 digits.
    Gs1,
}

impl ItemIdentificationType {
    pub fn code(&self) -> u16 {
        match self {
            Self::EnterpriseNumberBe => 1,
            Self::KvkNl => 2,
            Self::SireneFr => 3,
            Self::Gln => 20,
            Self::Gtin => 21,
            Self::Gs1 => 22,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(Self::EnterpriseNumberBe),
            2 => Some(Self::KvkNl),
            3 => Some(Self::SireneFr),
            20 => Some(Self::Gln),
            21 => Some(Self::Gtin),
            22 => Some(Self::Gs1),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::EnterpriseNumberBe => "Enterprise number (Belgium)",
            Self::KvkNl => "KvK number (Netherlands)",
            Self::SireneFr => "SIRENE (France)",
            Self::Gln => "Global Location Number (GLN)",
            Self::Gtin => "Global Trade Item Number (GTIN)",
            Self::Gs1 => "GS1 identification key",
        }
    }
}

int_code_serde!(ItemIdentificationType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vat_type_codes_round_trip() {
        for t in VatType::ALL {
            assert_eq!(VatType::from_code(t.code()), Some(t));
        }
        assert_eq!(VatType::from_code(0), None);
        assert_eq!(VatType::from_code(99), None);
    }

    #[test]
    fn vat_type_serializes_as_code() {
        assert_eq!(serde_json::to_string(&VatType::IcdGoods).unwrap(), "5");
        let t: VatType = serde_json::from_str("50").unwrap();
        assert_eq!(t, VatType::ReverseCharge);
        assert!(serde_json::from_str::<VatType>("11").is_err());
    }

    #[test]
    fn unit_codes_are_unique() {
        let mut codes: Vec<u16> = UnitType::ALL.iter().map(|u| u.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), UnitType::ALL.len());
        assert_eq!(UnitType::Hour.abbreviation(), "h");
    }

    #[test]
    fn file_type_from_mime() {
        assert_eq!(FileType::from_mime_type("application/pdf"), FileType::Pdf);
        assert_eq!(FileType::from_mime_type("image/png"), FileType::Image);
        assert_eq!(FileType::from_mime_type("text/xml"), FileType::Xml);
        // Compatibility fallback: unknown types are sent as PDF.
        assert_eq!(FileType::from_mime_type("text/plain"), FileType::Pdf);
    }

    #[test]
    fn tax_number_country() {
        assert_eq!(TaxNumberType::KvkNl.country_code(), "NL");
        assert_eq!(TaxNumberType::from_code(4), None);
    }
}
