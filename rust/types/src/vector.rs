use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MAX_DIMENSIONS: u32 = 32_768;
pub const MAX_HNSW_M: u32 = 512;
pub const MAX_EF_CONSTRUCTION: u32 = 4_096;
pub const MAX_EF_RUNTIME: u32 = 4_096;
pub const MAX_INITIAL_CAP: u32 = 1 << 30;
pub const MAX_BLOCK_SIZE: u32 = 1 << 20;

pub fn default_initial_cap() -> u32 {
    10 * 1024
}

pub fn default_hnsw_m() -> u32 {
    16
}

pub fn default_ef_construction() -> u32 {
    200
}

pub fn default_ef_runtime() -> u32 {
    10
}

pub fn default_block_size() -> u32 {
    1024
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DistanceMetric {
    #[serde(rename = "l2")]
    L2,
    #[serde(rename = "cosine")]
    Cosine,
    #[serde(rename = "ip")]
    Ip,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum VectorDataType {
    #[serde(rename = "float32")]
    Float32,
    #[serde(rename = "float16")]
    Float16,
    #[serde(rename = "bfloat16")]
    BFloat16,
    #[serde(rename = "float64")]
    Float64,
}

/// Parameters shared by every vector field regardless of the indexing
/// algorithm backing it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct VectorBaseParams {
    #[validate(range(min = 1, max = 32_768))]
    pub dimensions: u32,
    pub distance_metric: DistanceMetric,
    pub data_type: VectorDataType,
    #[serde(default = "default_initial_cap")]
    #[validate(range(min = 1, max = 1_073_741_824))]
    pub initial_cap: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct HnswParams {
    #[serde(default = "default_hnsw_m")]
    #[validate(range(min = 1, max = 512))]
    pub m: u32,
    #[serde(default = "default_ef_construction")]
    #[validate(range(min = 1, max = 4_096))]
    pub ef_construction: u32,
    #[serde(default = "default_ef_runtime")]
    #[validate(range(min = 1, max = 4_096))]
    pub ef_runtime: u32,
}

impl Default for HnswParams {
    fn default() -> Self {
        serde_json::from_str("{}").unwrap()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct FlatParams {
    #[serde(default = "default_block_size")]
    #[validate(range(min = 1, max = 1_048_576))]
    pub block_size: u32,
}

impl Default for FlatParams {
    fn default() -> Self {
        serde_json::from_str("{}").unwrap()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorAlgorithm {
    Hnsw(HnswParams),
    Flat(FlatParams),
}

impl From<HnswParams> for VectorAlgorithm {
    fn from(params: HnswParams) -> Self {
        VectorAlgorithm::Hnsw(params)
    }
}

impl From<FlatParams> for VectorAlgorithm {
    fn from(params: FlatParams) -> Self {
        VectorAlgorithm::Flat(params)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VectorIndexParams {
    #[serde(flatten)]
    pub base: VectorBaseParams,
    pub algorithm: VectorAlgorithm,
}

impl VectorIndexParams {
    pub fn hnsw(&self) -> Option<&HnswParams> {
        match &self.algorithm {
            VectorAlgorithm::Hnsw(params) => Some(params),
            VectorAlgorithm::Flat(_) => None,
        }
    }

    pub fn flat(&self) -> Option<&FlatParams> {
        match &self.algorithm {
            VectorAlgorithm::Hnsw(_) => None,
            VectorAlgorithm::Flat(params) => Some(params),
        }
    }
}
