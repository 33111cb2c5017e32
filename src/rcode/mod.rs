//! DNS response code classification.
//!
//! Maps an integer RCODE onto the IANA "DNS RCODEs" registry
//! (<https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-6>).
//! The registry is a sorted table of inclusive ranges rather than a match
//! cascade; its band boundaries are not arithmetically regular.

/// One registry row: inclusive `start..=end` and the label for every code in it.
struct RcodeRange {
    start: i64,
    end: i64,
    label: &'static str,
}

const fn named(code: i64, label: &'static str) -> RcodeRange {
    RcodeRange {
        start: code,
        end: code,
        label,
    }
}

const fn band(start: i64, end: i64, label: &'static str) -> RcodeRange {
    RcodeRange { start, end, label }
}

const UNASSIGNED: &str = "Unassigned";
const UNKNOWN: &str = "Unknown";

/// IANA RCODE registry, sorted by `start`, non-overlapping, covering 0..=65535.
///
/// Codes 9 and 16 are each assigned two meanings by different RFCs; both are
/// reported, joined by ` | `.
static RCODE_TABLE: &[RcodeRange] = &[
    named(0, "NoError: No Error"),
    named(1, "FormErr: Format Error"),
    named(2, "ServFail: Server Failure"),
    named(3, "NXDomain: Non-Existent Domain"),
    named(4, "NotImp: Not Implemented"),
    named(5, "Refused: Query Refused"),
    named(6, "YXDomain: Name Exists when it should not"),
    named(7, "YXRRSet: RR Set Exists when it should not"),
    named(8, "NXRRSet: RR Set that should exist does not"),
    named(
        9,
        "NotAuth: Server Not Authoritative for zone | NotAuth: Not Authorized",
    ),
    named(10, "NotZone: Name not contained in zone"),
    named(11, "DSOTYPENI: DSO-TYPE Not Implemented"),
    band(12, 15, UNASSIGNED),
    named(
        16,
        "BADVERS: Bad OPT Version | BADSIG: TSIG Signature Failure",
    ),
    named(17, "BADKEY: Key not recognized"),
    named(18, "BADTIME: Signature out of time window"),
    named(19, "BADMODE: Bad TKEY Mode"),
    named(20, "BADNAME: Duplicate key name"),
    named(21, "BADALG: Algorithm not supported"),
    named(22, "BADTRUNC: Bad Truncation"),
    named(23, "BADCOOKIE: Bad/missing Server Cookie"),
    band(24, 3840, UNASSIGNED),
    band(3841, 4095, "Reserved for Private Use"),
    band(4096, 65534, UNASSIGNED),
    named(65535, "Reserved, can be allocated by Standards Action"),
];

/// Looks up the registry label for `code` without the `(rcode: N)` suffix.
fn label_for(code: i64) -> &'static str {
    // Index of the first range whose end is >= code.
    let idx = RCODE_TABLE.partition_point(|range| range.end < code);
    match RCODE_TABLE.get(idx) {
        Some(range) if range.start <= code => range.label,
        _ => UNKNOWN,
    }
}

/// Classifies a DNS response code into a human-readable string.
///
/// Total over all integers: codes outside the registry (including negative
/// values) are reported as `Unknown`. The result always ends with
/// `" (rcode: <code>)"`.
///
/// # Examples
///
/// ```
/// use doh::classify;
///
/// assert_eq!(classify(3), "NXDomain: Non-Existent Domain (rcode: 3)");
/// assert_eq!(classify(12), "Unassigned (rcode: 12)");
/// assert_eq!(classify(-1), "Unknown (rcode: -1)");
/// ```
pub fn classify(code: i64) -> String {
    format!("{} (rcode: {})", label_for(code), code)
}
