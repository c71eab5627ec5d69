//! Static catalogs backing the currency and locale categories.
//!
//! Both tables are sorted and never change at runtime, so an index into them
//! is a stable, reproducible choice.

use std::fmt;

use serde::{Serialize, Serializer};

/// ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    numeric: u16,
    minor_units: u8,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn numeric(&self) -> u16 {
        self.numeric
    }

    pub fn minor_units(&self) -> u8 {
        self.minor_units
    }

    /// All known currencies, ordered by alphabetic code.
    pub fn available() -> &'static [Currency] {
        CURRENCIES
    }

    pub fn from_code(code: &str) -> Option<Currency> {
        CURRENCIES
            .binary_search_by(|currency| currency.code.cmp(code))
            .ok()
            .map(|idx| CURRENCIES[idx])
    }
}

impl Default for Currency {
    fn default() -> Self {
        USD
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

/// Language tag made of an ISO 639 language and an optional ISO 3166 region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    language: &'static str,
    region: Option<&'static str>,
}

impl Locale {
    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn region(&self) -> Option<&'static str> {
        self.region
    }

    /// All known locales, ordered by tag.
    pub fn available() -> &'static [Locale] {
        LOCALES
    }

    /// Looks up a `language[-REGION]` tag.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        LOCALES
            .iter()
            .copied()
            .find(|locale| locale.to_string().eq_ignore_ascii_case(tag))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            language: "en",
            region: None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(self.language),
        }
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const fn currency(code: &'static str, numeric: u16, minor_units: u8) -> Currency {
    Currency {
        code,
        numeric,
        minor_units,
    }
}

const fn locale(language: &'static str, region: Option<&'static str>) -> Locale {
    Locale { language, region }
}

const USD: Currency = currency("USD", 840, 2);

static CURRENCIES: &[Currency] = &[
    currency("AED", 784, 2),
    currency("AFN", 971, 2),
    currency("ALL", 8, 2),
    currency("AMD", 51, 2),
    currency("ANG", 532, 2),
    currency("AOA", 973, 2),
    currency("ARS", 32, 2),
    currency("AUD", 36, 2),
    currency("AWG", 533, 2),
    currency("AZN", 944, 2),
    currency("BAM", 977, 2),
    currency("BBD", 52, 2),
    currency("BDT", 50, 2),
    currency("BGN", 975, 2),
    currency("BHD", 48, 3),
    currency("BIF", 108, 0),
    currency("BMD", 60, 2),
    currency("BND", 96, 2),
    currency("BOB", 68, 2),
    currency("BRL", 986, 2),
    currency("BSD", 44, 2),
    currency("BTN", 64, 2),
    currency("BWP", 72, 2),
    currency("BYN", 933, 2),
    currency("BZD", 84, 2),
    currency("CAD", 124, 2),
    currency("CDF", 976, 2),
    currency("CHF", 756, 2),
    currency("CLP", 152, 0),
    currency("CNY", 156, 2),
    currency("COP", 170, 2),
    currency("CRC", 188, 2),
    currency("CUP", 192, 2),
    currency("CVE", 132, 2),
    currency("CZK", 203, 2),
    currency("DJF", 262, 0),
    currency("DKK", 208, 2),
    currency("DOP", 214, 2),
    currency("DZD", 12, 2),
    currency("EGP", 818, 2),
    currency("ERN", 232, 2),
    currency("ETB", 230, 2),
    currency("EUR", 978, 2),
    currency("FJD", 242, 2),
    currency("FKP", 238, 2),
    currency("GBP", 826, 2),
    currency("GEL", 981, 2),
    currency("GHS", 936, 2),
    currency("GIP", 292, 2),
    currency("GMD", 270, 2),
    currency("GNF", 324, 0),
    currency("GTQ", 320, 2),
    currency("GYD", 328, 2),
    currency("HKD", 344, 2),
    currency("HNL", 340, 2),
    currency("HTG", 332, 2),
    currency("HUF", 348, 2),
    currency("IDR", 360, 2),
    currency("ILS", 376, 2),
    currency("INR", 356, 2),
    currency("IQD", 368, 3),
    currency("IRR", 364, 2),
    currency("ISK", 352, 0),
    currency("JMD", 388, 2),
    currency("JOD", 400, 3),
    currency("JPY", 392, 0),
    currency("KES", 404, 2),
    currency("KGS", 417, 2),
    currency("KHR", 116, 2),
    currency("KMF", 174, 0),
    currency("KPW", 408, 2),
    currency("KRW", 410, 0),
    currency("KWD", 414, 3),
    currency("KYD", 136, 2),
    currency("KZT", 398, 2),
    currency("LAK", 418, 2),
    currency("LBP", 422, 2),
    currency("LKR", 144, 2),
    currency("LRD", 430, 2),
    currency("LSL", 426, 2),
    currency("LYD", 434, 3),
    currency("MAD", 504, 2),
    currency("MDL", 498, 2),
    currency("MGA", 969, 2),
    currency("MKD", 807, 2),
    currency("MMK", 104, 2),
    currency("MNT", 496, 2),
    currency("MOP", 446, 2),
    currency("MRU", 929, 2),
    currency("MUR", 480, 2),
    currency("MVR", 462, 2),
    currency("MWK", 454, 2),
    currency("MXN", 484, 2),
    currency("MYR", 458, 2),
    currency("MZN", 943, 2),
    currency("NAD", 516, 2),
    currency("NGN", 566, 2),
    currency("NIO", 558, 2),
    currency("NOK", 578, 2),
    currency("NPR", 524, 2),
    currency("NZD", 554, 2),
    currency("OMR", 512, 3),
    currency("PAB", 590, 2),
    currency("PEN", 604, 2),
    currency("PGK", 598, 2),
    currency("PHP", 608, 2),
    currency("PKR", 586, 2),
    currency("PLN", 985, 2),
    currency("PYG", 600, 0),
    currency("QAR", 634, 2),
    currency("RON", 946, 2),
    currency("RSD", 941, 2),
    currency("RUB", 643, 2),
    currency("RWF", 646, 0),
    currency("SAR", 682, 2),
    currency("SBD", 90, 2),
    currency("SCR", 690, 2),
    currency("SDG", 938, 2),
    currency("SEK", 752, 2),
    currency("SGD", 702, 2),
    currency("SHP", 654, 2),
    currency("SLE", 925, 2),
    currency("SOS", 706, 2),
    currency("SRD", 968, 2),
    currency("SSP", 728, 2),
    currency("STN", 930, 2),
    currency("SVC", 222, 2),
    currency("SYP", 760, 2),
    currency("SZL", 748, 2),
    currency("THB", 764, 2),
    currency("TJS", 972, 2),
    currency("TMT", 934, 2),
    currency("TND", 788, 3),
    currency("TOP", 776, 2),
    currency("TRY", 949, 2),
    currency("TTD", 780, 2),
    currency("TWD", 901, 2),
    currency("TZS", 834, 2),
    currency("UAH", 980, 2),
    currency("UGX", 800, 0),
    USD,
    currency("UYU", 858, 2),
    currency("UZS", 860, 2),
    currency("VES", 928, 2),
    currency("VND", 704, 0),
    currency("VUV", 548, 0),
    currency("WST", 882, 2),
    currency("XAF", 950, 0),
    currency("XCD", 951, 2),
    currency("XOF", 952, 0),
    currency("XPF", 953, 0),
    currency("YER", 886, 2),
    currency("ZAR", 710, 2),
    currency("ZMW", 967, 2),
    currency("ZWL", 932, 2),
];

static LOCALES: &[Locale] = &[
    locale("ar", None),
    locale("ar", Some("AE")),
    locale("ar", Some("EG")),
    locale("ar", Some("SA")),
    locale("bg", Some("BG")),
    locale("ca", Some("ES")),
    locale("cs", Some("CZ")),
    locale("da", Some("DK")),
    locale("de", None),
    locale("de", Some("AT")),
    locale("de", Some("CH")),
    locale("de", Some("DE")),
    locale("el", Some("GR")),
    locale("en", None),
    locale("en", Some("AU")),
    locale("en", Some("CA")),
    locale("en", Some("GB")),
    locale("en", Some("IE")),
    locale("en", Some("IN")),
    locale("en", Some("NZ")),
    locale("en", Some("US")),
    locale("en", Some("ZA")),
    locale("es", None),
    locale("es", Some("AR")),
    locale("es", Some("CL")),
    locale("es", Some("CO")),
    locale("es", Some("ES")),
    locale("es", Some("MX")),
    locale("et", Some("EE")),
    locale("fi", Some("FI")),
    locale("fr", None),
    locale("fr", Some("BE")),
    locale("fr", Some("CA")),
    locale("fr", Some("CH")),
    locale("fr", Some("FR")),
    locale("he", Some("IL")),
    locale("hi", Some("IN")),
    locale("hr", Some("HR")),
    locale("hu", Some("HU")),
    locale("id", Some("ID")),
    locale("is", Some("IS")),
    locale("it", None),
    locale("it", Some("CH")),
    locale("it", Some("IT")),
    locale("ja", Some("JP")),
    locale("ko", Some("KR")),
    locale("lt", Some("LT")),
    locale("lv", Some("LV")),
    locale("ms", Some("MY")),
    locale("nb", Some("NO")),
    locale("nl", None),
    locale("nl", Some("BE")),
    locale("nl", Some("NL")),
    locale("pl", Some("PL")),
    locale("pt", None),
    locale("pt", Some("BR")),
    locale("pt", Some("PT")),
    locale("ro", Some("RO")),
    locale("ru", Some("RU")),
    locale("sk", Some("SK")),
    locale("sl", Some("SI")),
    locale("sr", Some("RS")),
    locale("sv", Some("SE")),
    locale("th", Some("TH")),
    locale("tr", Some("TR")),
    locale("uk", Some("UA")),
    locale("vi", Some("VN")),
    locale("zh", None),
    locale("zh", Some("CN")),
    locale("zh", Some("HK")),
    locale("zh", Some("TW")),
];
