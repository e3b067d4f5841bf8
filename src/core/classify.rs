//! Derive a [`VatType`] from a VAT percentage when the caller gives none.

use rust_decimal::Decimal;

use super::codes::VatType;

/// Classify a domestic (Belgian) line.
///
/// Any positive percentage is `Standard`. Everything else is `Exempt`, not
/// `ZeroRate`: the upstream reports domestic 0% lines outside the VAT
/// declaration. Callers that need `ZeroRate` must set it explicitly.
pub fn classify_domestic(percentage: Decimal) -> VatType {
    if percentage > Decimal::ZERO {
        VatType::Standard
    } else {
        VatType::Exempt
    }
}

/// Classify a cross-border EU B2B line.
///
/// Positive percentages are `Standard`; otherwise the supply is an
/// intra-community service or goods delivery. Negative percentages are not
/// rejected and land in the zero branch.
pub fn classify_cross_border_b2b(percentage: Decimal, is_service: bool) -> VatType {
    if percentage > Decimal::ZERO {
        VatType::Standard
    } else if is_service {
        VatType::IcdServicesB2b
    } else {
        VatType::IcdGoods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn domestic() {
        assert_eq!(classify_domestic(dec!(21)), VatType::Standard);
        assert_eq!(classify_domestic(dec!(6)), VatType::Standard);
        assert_eq!(classify_domestic(dec!(0.01)), VatType::Standard);
        assert_eq!(classify_domestic(dec!(0)), VatType::Exempt);
        assert_eq!(classify_domestic(dec!(-5)), VatType::Exempt);
    }

    #[test]
    fn cross_border() {
        assert_eq!(classify_cross_border_b2b(dec!(21), true), VatType::Standard);
        assert_eq!(classify_cross_border_b2b(dec!(21), false), VatType::Standard);
        assert_eq!(classify_cross_border_b2b(dec!(0), true), VatType::IcdServicesB2b);
        assert_eq!(classify_cross_border_b2b(dec!(0), false), VatType::IcdGoods);
        assert_eq!(classify_cross_border_b2b(dec!(-1), false), VatType::IcdGoods);
    }
}
