//! FASTA header field extraction.

use regex::Regex;
use std::sync::OnceLock;

/// Display fields pulled out of a FASTA header line.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderInfo {
    pub id: String,
    pub name: String,
    pub organism: String,
}

fn gi_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^gi\|(\d+)\|.*\|\s*(.*?)\s*\[(.*?)\]$").unwrap())
}

fn uniprot_accession_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[OPQ][0-9][A-Z0-9]{3}[0-9]|[A-NR-Z][0-9]([A-Z][A-Z0-9]{2}[0-9]){1,2}")
            .unwrap()
    })
}

/// Parse the NCBI `gi|<id>|...| <name> [<organism>]` layout; anything else
/// falls back to the whole header as the name.
pub fn extract_protein_info(header: &str) -> HeaderInfo {
    if let Some(caps) = gi_header_re().captures(header) {
        return HeaderInfo {
            id: caps[1].to_string(),
            name: caps[2].to_string(),
            organism: caps[3].to_string(),
        };
    }
    HeaderInfo {
        id: "unknown".to_string(),
        name: header.to_string(),
        organism: "Unknown organism".to_string(),
    }
}

/// First UniProt accession found anywhere in the header, `"N/A"` if none.
pub fn extract_uniprot_id(header: &str) -> String {
    uniprot_accession_re()
        .find(header)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// The database accession segment of a pipe-delimited header: the second
/// field when pipes are present, otherwise the first whitespace token.
pub fn accession(header: &str) -> String {
    let mut parts = header.split('|');
    let first = parts.next().unwrap_or_default();
    match parts.next() {
        Some(second) => second.to_string(),
        None => first.split_whitespace().next().unwrap_or_default().to_string(),
    }
}

/// The trailing pipe-delimited segment, used as the short display name.
pub fn display_name(header: &str) -> String {
    header.split('|').last().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gi_header_extraction() {
        let info = extract_protein_info("gi|129295|sp|P01013| ovalbumin-related protein X [Gallus gallus]");
        assert_eq!(info.id, "129295");
        assert_eq!(info.name, "ovalbumin-related protein X");
        assert_eq!(info.organism, "Gallus gallus");
    }

    #[test]
    fn test_non_gi_header_falls_back() {
        let info = extract_protein_info("sp|P69905|HBA_HUMAN Hemoglobin subunit alpha");
        assert_eq!(info.id, "unknown");
        assert_eq!(info.name, "sp|P69905|HBA_HUMAN Hemoglobin subunit alpha");
        assert_eq!(info.organism, "Unknown organism");
    }

    #[test]
    fn test_uniprot_accession_patterns() {
        assert_eq!(extract_uniprot_id("sp|P69905|HBA_HUMAN"), "P69905");
        assert_eq!(extract_uniprot_id("tr|A0A024R161|A0A024R161_HUMAN"), "A0A024R161");
        assert_eq!(extract_uniprot_id("gi|129295|emb|Z78533.1|"), "N/A");
    }

    #[test]
    fn test_accession_and_display_name() {
        assert_eq!(accession("sp|P69905|HBA_HUMAN"), "P69905");
        assert_eq!(display_name("sp|P69905|HBA_HUMAN"), "HBA_HUMAN");
        assert_eq!(accession("NP_000509.1 hemoglobin"), "NP_000509.1");
        assert_eq!(display_name("plain"), "plain");
    }
}
