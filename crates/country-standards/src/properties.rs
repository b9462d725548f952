//! Declared properties of the country table.

use country_model::{PropertyDescriptor, Schema};

pub const ALPHA2: &str = "alpha2";
pub const ALPHA3: &str = "alpha3";
pub const NUMERIC: &str = "numeric";
pub const EUROSTAT: &str = "eurostat";
pub const NAME_EN: &str = "name_en";
pub const NAME_FR: &str = "name_fr";
pub const FORMAL_EN: &str = "formal_en";
pub const REGION: &str = "region";
pub const SUB_REGION: &str = "sub_region";
pub const CONTINENT: &str = "continent";
pub const CAPITAL: &str = "capital";
pub const TLD: &str = "tld";
pub const CURRENCY: &str = "currency";

/// Every declared property, in column order.
pub const PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor::symbol(ALPHA2, "ISO3166-1-Alpha-2")
        .global()
        .fold_case()
        .described("ISO 3166-1 alpha-2 code"),
    PropertyDescriptor::symbol(ALPHA3, "ISO3166-1-Alpha-3")
        .global()
        .fold_case()
        .described("ISO 3166-1 alpha-3 code"),
    PropertyDescriptor::integer(NUMERIC, "ISO3166-1-numeric")
        .unique()
        .described("ISO 3166-1 numeric code"),
    PropertyDescriptor::symbol(EUROSTAT, "Eurostat")
        .global()
        .fold_case()
        .described("Eurostat country code (EL for Greece, UK for the United Kingdom)"),
    PropertyDescriptor::text(NAME_EN, "official_name_en")
        .global()
        .fold_case()
        .described("Short name in English"),
    PropertyDescriptor::text(NAME_FR, "official_name_fr")
        .global()
        .fold_case()
        .described("Short name in French"),
    PropertyDescriptor::text(FORMAL_EN, "UNTERM English Formal")
        .global()
        .fold_case()
        .described("UN formal name in English"),
    PropertyDescriptor::symbol(REGION, "Region Name").described("UN M49 region"),
    PropertyDescriptor::symbol(SUB_REGION, "Sub-region Name").described("UN M49 sub-region"),
    PropertyDescriptor::symbol(CONTINENT, "Continent").described("Continent code"),
    PropertyDescriptor::text(CAPITAL, "Capital").described("Capital city"),
    PropertyDescriptor::text(TLD, "TLD")
        .unique()
        .fold_case()
        .described("Country-code top-level domain"),
    PropertyDescriptor::symbol(CURRENCY, "ISO4217-currency_alphabetic_code")
        .described("ISO 4217 currency code"),
];

/// Schema of the embedded country table.
pub const COUNTRY_SCHEMA: Schema = Schema {
    properties: PROPERTIES,
    primary: ALPHA2,
    order_key: ALPHA3,
    numeric: NUMERIC,
    display_name: NAME_EN,
};
