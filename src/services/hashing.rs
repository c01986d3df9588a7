//! Message digests (MD5 and the SHA-2 family), rendered as lowercase hex.

use crate::domain::models::HashReport;
use serde::Serialize;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let wanted = raw.trim().to_ascii_lowercase().replace('-', "");
        Self::ALL.into_iter().find(|a| a.name() == wanted)
    }
}

fn sha2_hex<D: Digest>(bytes: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

pub fn digest(algorithm: HashAlgorithm, bytes: &[u8]) -> HashReport {
    let digest = match algorithm {
        HashAlgorithm::Md5 => format!("{:x}", md5::compute(bytes)),
        HashAlgorithm::Sha224 => sha2_hex::<Sha224>(bytes),
        HashAlgorithm::Sha256 => sha2_hex::<Sha256>(bytes),
        HashAlgorithm::Sha384 => sha2_hex::<Sha384>(bytes),
        HashAlgorithm::Sha512 => sha2_hex::<Sha512>(bytes),
    };
    HashReport {
        algorithm: algorithm.name().to_string(),
        digest,
    }
}
