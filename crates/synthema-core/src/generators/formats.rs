use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::{Rng, RngCore};

use crate::generators::primitives::random_letters;
use crate::model::GenerateOptions;

/// String formats with a dedicated generator.
pub const SUPPORTED_FORMATS: &[&str] = &[
    "date-time",
    "date",
    "time",
    "email",
    "hostname",
    "ipv4",
    "ipv6",
    "uri",
    "uuid",
];

const TOP_LEVEL_DOMAINS: &[&str] = &["com", "org", "net", "io", "dev"];

/// Generate a string for a known `format`; `None` means plain string fallback.
pub fn generate_format(
    format: &str,
    options: &GenerateOptions,
    rng: &mut dyn RngCore,
) -> Option<String> {
    let value = match format {
        "date-time" => random_datetime(options, rng)?
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string(),
        "date" => random_datetime(options, rng)?
            .format("%Y-%m-%d")
            .to_string(),
        "time" => random_datetime(options, rng)?
            .format("%H:%M:%SZ")
            .to_string(),
        "email" => {
            let user = word(rng, 3, 10);
            format!("{user}@{}", random_hostname(rng))
        }
        "hostname" => random_hostname(rng),
        "ipv4" => {
            let octets: [u8; 4] = rng.random();
            format!(
                "{}.{}.{}.{}",
                octets[0], octets[1], octets[2], octets[3]
            )
        }
        "ipv6" => (0..8)
            .map(|_| format!("{:x}", rng.random::<u16>()))
            .collect::<Vec<_>>()
            .join(":"),
        "uri" => {
            let path = word(rng, 1, 12);
            format!("https://{}/{path}", random_hostname(rng))
        }
        "uuid" => random_uuid(rng),
        _ => return None,
    };
    Some(value)
}

/// Uniform date-time between the configured years.
///
/// The lower bound starts at January 1st with a random hour and minute; the
/// result is that lower bound shifted by a uniform number of whole days.
fn random_datetime(options: &GenerateOptions, rng: &mut dyn RngCore) -> Option<NaiveDateTime> {
    let start = NaiveDate::from_ymd_opt(options.datetime_start_year, 1, 1)?
        .and_hms_opt(rng.random_range(0..24), rng.random_range(0..60), 0)?;
    let end = NaiveDate::from_ymd_opt(options.datetime_end_year, 1, 1)?.and_hms_opt(0, 0, 0)?;
    let days = (end - start).num_days().max(1);
    let offset = rng.random_range(0..days);
    start.checked_add_signed(Duration::days(offset))
}

fn random_hostname(rng: &mut dyn RngCore) -> String {
    let label = word(rng, 3, 8);
    let tld = TOP_LEVEL_DOMAINS[rng.random_range(0..TOP_LEVEL_DOMAINS.len())];
    format!("{label}.{tld}")
}

fn word(rng: &mut dyn RngCore, min_len: usize, max_len: usize) -> String {
    let len = rng.random_range(min_len..=max_len);
    random_letters(len, rng)
}

fn random_uuid(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    uuid::Uuid::from_bytes(bytes).to_string()
}
