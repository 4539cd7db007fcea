use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Card brand families, detected from the leading digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    Amex,
    Mastercard,
    Discover,
    RuPay,
    Visa,
    Unknown,
}

/// Ordered prefix table; the first matching entry wins. Longer prefixes sit
/// before shorter overlapping ones (6011/65 Discover before 60 RuPay).
const BRAND_PREFIXES: &[(&[&str], CardBrand)] = &[
    (&["34", "37"], CardBrand::Amex),
    (&["51", "52", "53", "54", "55"], CardBrand::Mastercard),
    (&["6011", "65"], CardBrand::Discover),
    (&["508", "60", "81", "82"], CardBrand::RuPay),
    (&["4"], CardBrand::Visa),
];

fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Luhn checksum over the card number's digits.
///
/// Non-digits (spaces, hyphens) are stripped first; the remaining digit
/// count must be 13..=19. Starting from the rightmost digit, every second
/// digit is doubled (minus 9 when the double exceeds 9) and the total must
/// be divisible by 10.
pub fn validate_card_number(number: &str) -> bool {
    let digits = digits_of(number);
    if digits.len() < 13 || digits.len() > 19 {
        return false;
    }
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = (b - b'0') as u32;
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Detects the brand family from the card number's leading digits.
pub fn detect_brand(number: &str) -> CardBrand {
    let digits = digits_of(number);
    for (prefixes, brand) in BRAND_PREFIXES {
        if prefixes.iter().any(|prefix| digits.starts_with(prefix)) {
            return *brand;
        }
    }
    CardBrand::Unknown
}

/// True iff `month` is a calendar month and the year/month pair is not
/// strictly before `now`'s year/month. A card expiring this month is valid.
pub fn validate_expiry(month: u32, year: i32, now: DateTime<Utc>) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    (year, month) >= (now.year(), now.month())
}

/// CVV: digits only, 4 for Amex, 3 for every other family.
pub fn validate_cvv(code: &str, brand: CardBrand) -> bool {
    let expected = if brand == CardBrand::Amex { 4 } else { 3 };
    code.len() == expected && code.bytes().all(|b| b.is_ascii_digit())
}

/// Bank routing code (IFSC shape): 4 letters, a literal `0`, then 6
/// alphanumeric characters.
pub fn validate_bank_routing_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 11
        && bytes[..4].iter().all(|b| b.is_ascii_alphabetic())
        && bytes[4] == b'0'
        && bytes[5..].iter().all(|b| b.is_ascii_alphanumeric())
}

/// Virtual payment address: `local@domain`, both parts non-empty and made
/// of word, dot, or hyphen characters. A second `@` fails the domain check.
pub fn validate_virtual_payment_address(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    let part_ok = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
    };
    part_ok(local) && part_ok(domain)
}

/// Raw instrument fields supplied transiently for one validation attempt.
///
/// Never persisted: the only representation that outlives validation is the
/// value returned by [`PaymentInstrumentDraft::masked`].
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentInstrumentDraft {
    Card {
        number: String,
        expiry_month: u32,
        expiry_year: i32,
        cvv: String,
    },
    NetBanking {
        routing_code: String,
        account_number: String,
    },
    Vpa {
        address: String,
    },
}

/// A field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentFault {
    CardNumber,
    Expiry,
    Cvv,
    RoutingCode,
    AccountNumber,
    Address,
}

/// Structured validity the checkout form consumes to gate submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentValidity {
    pub faults: Vec<InstrumentFault>,
}

impl InstrumentValidity {
    pub fn is_valid(&self) -> bool {
        self.faults.is_empty()
    }
}

/// The retained, storage-safe form of an instrument: type plus last 4
/// digits or a masked address. Raw numbers are discarded after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaskedInstrument {
    Card { brand: CardBrand, last4: String },
    NetBanking { account_last4: String },
    Vpa { address: String },
}

impl PaymentInstrumentDraft {
    /// Validates every field of the draft; malformed input classifies as a
    /// fault, never an error.
    pub fn validate(&self, now: DateTime<Utc>) -> InstrumentValidity {
        let mut faults = Vec::new();
        match self {
            PaymentInstrumentDraft::Card {
                number,
                expiry_month,
                expiry_year,
                cvv,
            } => {
                if !validate_card_number(number) {
                    faults.push(InstrumentFault::CardNumber);
                }
                if !validate_expiry(*expiry_month, *expiry_year, now) {
                    faults.push(InstrumentFault::Expiry);
                }
                if !validate_cvv(cvv, detect_brand(number)) {
                    faults.push(InstrumentFault::Cvv);
                }
            }
            PaymentInstrumentDraft::NetBanking {
                routing_code,
                account_number,
            } => {
                if !validate_bank_routing_code(routing_code) {
                    faults.push(InstrumentFault::RoutingCode);
                }
                let len = account_number.len();
                if !(6..=18).contains(&len)
                    || !account_number.bytes().all(|b| b.is_ascii_digit())
                {
                    faults.push(InstrumentFault::AccountNumber);
                }
            }
            PaymentInstrumentDraft::Vpa { address } => {
                if !validate_virtual_payment_address(address) {
                    faults.push(InstrumentFault::Address);
                }
            }
        }
        InstrumentValidity { faults }
    }

    /// Masked representation safe to store with the order.
    pub fn masked(&self) -> MaskedInstrument {
        match self {
            PaymentInstrumentDraft::Card { number, .. } => MaskedInstrument::Card {
                brand: detect_brand(number),
                last4: last4(number),
            },
            PaymentInstrumentDraft::NetBanking { account_number, .. } => {
                MaskedInstrument::NetBanking {
                    account_last4: last4(account_number),
                }
            }
            PaymentInstrumentDraft::Vpa { address } => MaskedInstrument::Vpa {
                address: mask_address(address),
            },
        }
    }
}

fn last4(raw: &str) -> String {
    let digits = digits_of(raw);
    let start = digits.len().saturating_sub(4);
    digits[start..].to_string()
}

fn mask_address(address: &str) -> String {
    match address.split_once('@') {
        Some((local, domain)) => {
            let head: String = local.chars().take(1).collect();
            format!("{head}***@{domain}")
        }
        None => "***".to_string(),
    }
}
