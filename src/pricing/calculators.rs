//! Core pricing calculation functions.
//!
//! Pure functions for order subtotal math - no I/O, no logging, safe to
//! call any number of times with the same input. Failure never
//! propagates: unparsable money returns `None`, missing identifiers and
//! failed lookups return zero, malformed addons are skipped. The
//! contract is "always produce a number" for a UI total display, not a
//! validation layer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{AddonKind, LineItem, PriceAddon, Product};

/// Parse a currency-like string into an integer amount.
///
/// Every non-digit character is stripped first, so currency symbols,
/// thousands separators and decimal points all disappear and the
/// surviving digits are read as one base-10 integer. `"$1,234.56"`
/// therefore parses to `123456`, not `1234.56` - decimal fractions are
/// merged into the digit stream, not rounded.
///
/// Returns `None` when no digits remain, or when the digit run
/// overflows `i64`.
///
/// # Examples
/// ```
/// use orderform_web::pricing::parse_money;
///
/// assert_eq!(parse_money("$1,234.56"), Some(123456));
/// assert_eq!(parse_money("abc"), None);
/// ```
pub fn parse_money(input: &str) -> Option<i64> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok()
}

/// Leading signed integer run of a raw form value, or `None` when the
/// value has no leading digits.
fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let run = rest.bytes().take_while(u8::is_ascii_digit).count();
    if run == 0 {
        return None;
    }
    rest[..run].parse::<i64>().ok().map(|n| sign * n)
}

/// Unit price for a single line item.
///
/// An explicit, parseable `custom_price` overrides the catalog
/// outright, even when the item also carries valid product and variant
/// ids. A custom price that fails to parse falls through to the catalog
/// path. The catalog path requires both `product_id` and `variant_id`;
/// a missing id or a failed first-match lookup yields zero.
pub fn calculate_item_price(products: &[Product], item: &LineItem) -> Decimal {
    if let Some(raw) = item.custom_price.as_deref() {
        if let Some(price) = parse_money(raw) {
            return Decimal::from(price);
        }
    }

    let (Some(product_id), Some(variant_id)) =
        (item.product_id.as_deref(), item.variant_id.as_deref())
    else {
        return Decimal::ZERO;
    };

    let Some(product) = products.iter().find(|p| p.id == product_id) else {
        return Decimal::ZERO;
    };

    product
        .variants
        .iter()
        .find(|v| v.id == variant_id)
        .map(|v| v.price)
        .unwrap_or(Decimal::ZERO)
}

/// Line total: unit price times quantity.
///
/// Quantity is the leading integer run of the form value and defaults
/// to 1 when the field is absent or carries no digits. It is not
/// validated as positive.
pub fn calculate_item_total(products: &[Product], item: &LineItem) -> Decimal {
    let price = calculate_item_price(products, item);
    let quantity = item
        .quantity
        .as_deref()
        .and_then(parse_leading_int)
        .unwrap_or(1);
    price * Decimal::from(quantity)
}

/// Fold line items plus the ordered addon list into the final subtotal.
///
/// Flat addons apply immediately: discounts subtract, every other kind
/// adds. Percentage addons feed four per-kind accumulators which are
/// then all re-applied to the running sum in fixed order - fees,
/// shipping, discount (subtracted), taxes - each step compounding on
/// the post-previous-step sum. The re-application happens on every
/// percentage addon encountered, including ones whose kind matches no
/// accumulator. That compounding is the observable contract for the
/// rendered total and must stay exactly as is.
///
/// An addon with no kind, an unparsable amount or a zero amount is
/// skipped entirely.
pub fn calculate_subtotal(
    products: &[Product],
    items: &[LineItem],
    price_addons: &[PriceAddon],
) -> Decimal {
    let mut sum: Decimal = items
        .iter()
        .map(|item| calculate_item_total(products, item))
        .sum();

    let mut discounts_percentage = Decimal::ZERO;
    let mut taxes_percentage = Decimal::ZERO;
    let mut fees_percentage = Decimal::ZERO;
    let mut shipping_percentage = Decimal::ZERO;

    for addon in price_addons {
        let Some(kind) = addon.kind.as_ref() else {
            continue;
        };
        let Some(amount) = addon
            .amount
            .as_deref()
            .and_then(parse_money)
            .filter(|n| *n != 0)
        else {
            continue;
        };
        let amount = Decimal::from(amount);

        if !addon.is_percentage {
            if *kind == AddonKind::Discount {
                sum -= amount;
            } else {
                sum += amount;
            }
            continue;
        }

        match kind {
            AddonKind::Fees => fees_percentage += amount / dec!(100),
            AddonKind::Taxes => taxes_percentage += amount / dec!(100),
            AddonKind::Shipping => shipping_percentage += amount / dec!(100),
            AddonKind::Discount => discounts_percentage += amount / dec!(100),
            AddonKind::Other(_) => {}
        }

        sum += sum * fees_percentage;
        sum += sum * shipping_percentage;
        sum -= sum * discounts_percentage;
        sum += sum * taxes_percentage;
    }

    sum
}
