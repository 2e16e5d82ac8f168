//! proteogel-links — external database link resolution.
//!
//! Each protein accession is probed against NCBI, PDB, and UniProt in
//! turn, based on the accession's shape. Probes run concurrently across a
//! batch but the result mapping is keyed by accession, so completion
//! order never matters. A failed probe degrades that one accession to the
//! `"N/A"` sentinel; it never fails the batch.

use std::collections::HashMap;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, instrument, warn};

use proteogel_common::sandbox::SandboxClient;

const NCBI_ESUMMARY_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";
const NCBI_PROTEIN_URL: &str = "https://www.ncbi.nlm.nih.gov/protein";
const PDB_ENTRY_URL: &str = "https://data.rcsb.org/rest/v1/core/entry";
const PDB_STRUCTURE_URL: &str = "https://www.rcsb.org/structure";
const UNIPROT_URL: &str = "https://www.uniprot.org/uniprotkb";
const UNIPARC_URL: &str = "https://www.uniprot.org/uniparc";

/// Sentinel for an accession no database claimed.
pub const NO_LINK: &str = "N/A";

/// Probes in flight at once per batch.
const MAX_IN_FLIGHT: usize = 8;

#[derive(Debug, Clone)]
pub struct LinkResolver {
    client: SandboxClient,
    use_uniparc_fallback: bool,
}

impl LinkResolver {
    pub fn new() -> proteogel_common::Result<Self> {
        Ok(Self {
            client: SandboxClient::new()?,
            use_uniparc_fallback: true,
        })
    }

    /// Resolve a batch of accessions to database URLs.
    ///
    /// Returns one entry per distinct accession; unresolvable ones map to
    /// [`NO_LINK`].
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn find_links(&self, ids: &[String]) -> HashMap<String, String> {
        stream::iter(ids.iter().cloned())
            .map(|id| async move {
                let link = self.resolve(&id).await;
                (id, link)
            })
            .buffer_unordered(MAX_IN_FLIGHT)
            .collect()
            .await
    }

    async fn resolve(&self, pid: &str) -> String {
        if ncbi_shaped(pid) && self.probe(&format!("{}?db=protein&id={}&retmode=json", NCBI_ESUMMARY_URL, pid)).await {
            return format!("{}/{}", NCBI_PROTEIN_URL, pid);
        }

        if pdb_shaped(pid) && self.probe(&format!("{}/{}", PDB_ENTRY_URL, pid)).await {
            return format!("{}/{}", PDB_STRUCTURE_URL, pid);
        }

        if uniprot_shaped(pid) {
            if self.probe(&format!("{}/{}", UNIPROT_URL, pid)).await {
                return format!("{}/{}", UNIPROT_URL, pid);
            }
            if self.use_uniparc_fallback {
                return format!("{}/{}", UNIPARC_URL, pid);
            }
        }

        debug!(pid, "no database claimed accession");
        NO_LINK.to_string()
    }

    /// One GET probe; any transport or policy failure counts as a miss.
    async fn probe(&self, url: &str) -> bool {
        let request = match self.client.get(url) {
            Ok(request) => request,
            Err(e) => {
                warn!(url, error = %e, "link probe refused");
                return false;
            }
        };
        match request.send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(url, error = %e, "link probe failed");
                false
            }
        }
    }
}

/// Numeric accessions and RefSeq/EMBL-style prefixes belong to NCBI.
fn ncbi_shaped(pid: &str) -> bool {
    let digits = pid.replace('.', "");
    (!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
        || pid.starts_with("NP_")
        || pid.starts_with("XP_")
        || pid.starts_with("CAA")
        || pid.starts_with("AFP")
}

/// Four alphanumeric characters is the PDB entry shape.
fn pdb_shaped(pid: &str) -> bool {
    pid.len() == 4 && pid.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Alphanumeric but not purely numeric falls through to UniProt.
fn uniprot_shaped(pid: &str) -> bool {
    let digits = pid.replace('.', "");
    !pid.is_empty()
        && pid.chars().all(|c| c.is_ascii_alphanumeric())
        && !(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ncbi_shapes() {
        assert!(ncbi_shaped("2765658"));
        assert!(ncbi_shaped("170.2"));
        assert!(ncbi_shaped("NP_000509"));
        assert!(ncbi_shaped("XP_011541469"));
        assert!(ncbi_shaped("CAA23748"));
        assert!(!ncbi_shaped("P69905"));
    }

    #[test]
    fn test_pdb_shape() {
        assert!(pdb_shaped("1TUP"));
        assert!(pdb_shaped("4hhb"));
        assert!(!pdb_shaped("P69905"));
        assert!(!pdb_shaped("1TU"));
    }

    #[test]
    fn test_uniprot_shape() {
        assert!(uniprot_shaped("P69905"));
        assert!(uniprot_shaped("A0A024R161"));
        assert!(!uniprot_shaped("2765658"));
        assert!(!uniprot_shaped("NP_000509.1"));
        assert!(!uniprot_shaped(""));
    }

    #[tokio::test]
    async fn test_empty_batch_resolves_to_empty_map() {
        let resolver = LinkResolver::new().unwrap();
        let links = resolver.find_links(&[]).await;
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_unclaimed_accession_degrades_to_sentinel() {
        let resolver = LinkResolver::new().unwrap();
        // Not alphanumeric: no database is probed at all.
        let links = resolver.find_links(&["not|an|id".to_string()]).await;
        assert_eq!(links.get("not|an|id").map(String::as_str), Some(NO_LINK));
    }
}
