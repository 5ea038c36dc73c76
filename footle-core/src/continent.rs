/// Coarse geographic grouping used to soften a nationality mismatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    Asia,
    Europe,
    Africa,
    Oceania,
    Americas,
    Other,
}

impl Continent {
    /// Bucket an upper-cased country code. Unmapped codes land in `Other`.
    ///
    /// The table is kept as the game has always shipped it so that hints
    /// stay stable for players. Some entries are geographically off
    /// (`--`, `RU`, `TR` and `CY` bucket to Asia) and should be corrected
    /// as data, not worked around here.
    pub fn from_country_code(code: &str) -> Self {
        match code {
            "AF" | "AM" | "AZ" | "BH" | "BD" | "BT" | "BN" | "KH" | "CN" | "CX" | "CC" | "CY"
            | "GE" | "IN" | "ID" | "IR" | "IQ" | "IL" | "JP" | "JO" | "KZ" | "KP" | "KR"
            | "KW" | "KG" | "LA" | "LB" | "MY" | "MV" | "MN" | "NP" | "OM" | "PK" | "--"
            | "PH" | "QA" | "RU" | "SA" | "SG" | "LK" | "SY" | "TW" | "TJ" | "TH" | "TR"
            | "TM" | "AE" | "UZ" | "VN" | "YE" => Continent::Asia,

            "AL" | "AD" | "AT" | "BY" | "BE" | "BA" | "BG" | "HR" | "CZ" | "DK" | "EE" | "FO"
            | "FI" | "FR" | "DE" | "GI" | "GR" | "VA" | "HU" | "IS" | "IE" | "IT" | "LV"
            | "LI" | "LT" | "LU" | "MK" | "MT" | "MD" | "MC" | "NL" | "NO" | "PL" | "PT"
            | "RO" | "SM" | "SK" | "SI" | "ES" | "SJ" | "SE" | "CH" | "UA" | "GB" | "GB-ENG"
            | "GB-WLS" | "GB-SCT" | "GB-NIR" => Continent::Europe,

            "DZ" | "AO" | "BJ" | "BW" | "BF" | "BI" | "CM" | "CV" | "CF" | "TD" | "KM" | "CG"
            | "CI" | "DJ" | "EG" | "GQ" | "ER" | "ET" | "GA" | "GM" | "GH" | "GN" | "GW"
            | "KE" | "LS" | "LR" | "LY" | "MG" | "MW" | "ML" | "MR" | "MU" | "YT" | "MA"
            | "MZ" | "NA" | "NE" | "NG" | "RE" | "RW" | "ST" | "SN" | "SC" | "SL" | "SO"
            | "ZA" | "SD" | "SZ" | "TZ" | "TG" | "TN" | "UG" | "EH" | "ZR" | "ZM" | "ZW" => {
                Continent::Africa
            }

            "AS" | "AU" | "CK" | "FJ" | "PF" | "GU" | "KI" | "MH" | "FM" | "NR" | "NC" | "NZ"
            | "NU" | "NF" | "MP" | "PW" | "PG" | "PN" | "SB" | "TK" | "TO" | "TV" | "VU"
            | "WF" | "WS" => Continent::Oceania,

            "AI" | "AG" | "AR" | "AW" | "BS" | "BB" | "BZ" | "BM" | "BO" | "BR" | "VG" | "CA"
            | "KY" | "CL" | "CO" | "CR" | "CU" | "DM" | "DO" | "EC" | "SV" | "FK" | "GF"
            | "GL" | "GD" | "GP" | "GT" | "GY" | "HT" | "HN" | "JM" | "MQ" | "MX" | "MS"
            | "AN" | "NI" | "PA" | "PY" | "PE" | "PR" | "KN" | "LC" | "PM" | "VC" | "SR"
            | "TT" | "TC" | "US" | "UY" | "VE" | "VI" => Continent::Americas,

            _ => Continent::Other,
        }
    }
}
