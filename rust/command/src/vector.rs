use crate::{
    cursor::ArgCursor,
    decode::{expected_symbols, lookup_symbol, parse_u32, take_u32, DISTANCE_METRICS, VECTOR_DATA_TYPES},
    field::VECTOR,
    CreateIndexError,
};
use shoal_types::{
    default_block_size, default_ef_construction, default_ef_runtime, default_hnsw_m,
    default_initial_cap, DistanceMetric, FieldIndex, FlatParams, HnswParams, VectorAlgorithm,
    VectorBaseParams, VectorDataType, VectorIndexParams, MAX_BLOCK_SIZE, MAX_DIMENSIONS,
    MAX_EF_CONSTRUCTION, MAX_EF_RUNTIME, MAX_HNSW_M, MAX_INITIAL_CAP,
};

pub(crate) const HNSW: &str = "HNSW";
pub(crate) const FLAT: &str = "FLAT";
const DIM: &str = "DIM";
const DISTANCE_METRIC: &str = "DISTANCE_METRIC";
const TYPE: &str = "TYPE";
const INITIAL_CAP: &str = "INITIAL_CAP";
const M: &str = "M";
const EF_CONSTRUCTION: &str = "EF_CONSTRUCTION";
const EF_RUNTIME: &str = "EF_RUNTIME";
const BLOCK_SIZE: &str = "BLOCK_SIZE";

/// Collected base parameters of a vector field. `finalize` rejects drafts
/// whose required parameters were never supplied.
#[derive(Debug, Default)]
struct VectorBaseDraft {
    dimensions: Option<u32>,
    distance_metric: Option<DistanceMetric>,
    data_type: Option<VectorDataType>,
    initial_cap: Option<u32>,
}

impl VectorBaseDraft {
    fn finalize(self, field: &str) -> Result<VectorBaseParams, CreateIndexError> {
        Ok(VectorBaseParams {
            dimensions: self.dimensions.ok_or_else(|| missing(field, DIM))?,
            distance_metric: self
                .distance_metric
                .ok_or_else(|| missing(field, DISTANCE_METRIC))?,
            data_type: self.data_type.ok_or_else(|| missing(field, TYPE))?,
            initial_cap: self.initial_cap.unwrap_or(default_initial_cap()),
        })
    }
}

#[derive(Debug, Default)]
struct HnswDraft {
    m: Option<u32>,
    ef_construction: Option<u32>,
    ef_runtime: Option<u32>,
}

impl HnswDraft {
    fn finalize(self) -> HnswParams {
        HnswParams {
            m: self.m.unwrap_or(default_hnsw_m()),
            ef_construction: self.ef_construction.unwrap_or(default_ef_construction()),
            ef_runtime: self.ef_runtime.unwrap_or(default_ef_runtime()),
        }
    }
}

#[derive(Debug, Default)]
struct FlatDraft {
    block_size: Option<u32>,
}

impl FlatDraft {
    fn finalize(self) -> FlatParams {
        FlatParams {
            block_size: self.block_size.unwrap_or(default_block_size()),
        }
    }
}

fn missing(field: &str, parameter: &'static str) -> CreateIndexError {
    CreateIndexError::MissingRequiredField {
        field: field.to_string(),
        parameter,
    }
}

/// Parse `VECTOR <algorithm> <count> <keyword> <value> ...` after the VECTOR
/// keyword itself has been consumed. `count` is the exact number of tokens
/// the parameter list occupies; tokens beyond it belong to the next field.
pub(crate) fn parse_vector_field(
    cursor: &mut ArgCursor,
    field: &str,
) -> Result<FieldIndex, CreateIndexError> {
    let algorithm_position = cursor.position();
    let algorithm = cursor.take_token("vector algorithm")?;
    let keyword = if algorithm.eq_ignore_ascii_case(HNSW) {
        HNSW
    } else if algorithm.eq_ignore_ascii_case(FLAT) {
        FLAT
    } else {
        return Err(CreateIndexError::InvalidValue {
            keyword: VECTOR.to_string(),
            token: algorithm.to_string(),
            position: algorithm_position,
            expected: "one of HNSW, FLAT".to_string(),
        });
    };
    let count = take_u32(cursor, keyword, 0, u32::MAX)?;
    if (cursor.remaining() as u64) < count as u64 {
        return Err(CreateIndexError::UnexpectedEndOfInput {
            context: "vector parameters",
        });
    }
    let end = cursor.position() + count as usize;
    let params = if keyword == HNSW {
        parse_hnsw_params(cursor, end, field)?
    } else {
        parse_flat_params(cursor, end, field)?
    };
    Ok(FieldIndex::Vector(params))
}

fn parse_hnsw_params(
    cursor: &mut ArgCursor,
    end: usize,
    field: &str,
) -> Result<VectorIndexParams, CreateIndexError> {
    let mut base = VectorBaseDraft::default();
    let mut hnsw = HnswDraft::default();
    while cursor.position() < end {
        let position = cursor.position();
        let keyword = cursor.take_token("vector parameters")?;
        if keyword.eq_ignore_ascii_case(DIM) {
            if base.dimensions.is_some() {
                return Err(CreateIndexError::duplicate_option(DIM, position));
            }
            base.dimensions = Some(pair_u32(cursor, DIM, 1, MAX_DIMENSIONS, end)?);
        } else if keyword.eq_ignore_ascii_case(DISTANCE_METRIC) {
            if base.distance_metric.is_some() {
                return Err(CreateIndexError::duplicate_option(DISTANCE_METRIC, position));
            }
            base.distance_metric =
                Some(pair_symbol(cursor, DISTANCE_METRIC, DISTANCE_METRICS, end)?);
        } else if keyword.eq_ignore_ascii_case(TYPE) {
            if base.data_type.is_some() {
                return Err(CreateIndexError::duplicate_option(TYPE, position));
            }
            base.data_type = Some(pair_symbol(cursor, TYPE, VECTOR_DATA_TYPES, end)?);
        } else if keyword.eq_ignore_ascii_case(INITIAL_CAP) {
            if base.initial_cap.is_some() {
                return Err(CreateIndexError::duplicate_option(INITIAL_CAP, position));
            }
            base.initial_cap = Some(pair_u32(cursor, INITIAL_CAP, 1, MAX_INITIAL_CAP, end)?);
        } else if keyword.eq_ignore_ascii_case(M) {
            if hnsw.m.is_some() {
                return Err(CreateIndexError::duplicate_option(M, position));
            }
            hnsw.m = Some(pair_u32(cursor, M, 1, MAX_HNSW_M, end)?);
        } else if keyword.eq_ignore_ascii_case(EF_CONSTRUCTION) {
            if hnsw.ef_construction.is_some() {
                return Err(CreateIndexError::duplicate_option(EF_CONSTRUCTION, position));
            }
            hnsw.ef_construction =
                Some(pair_u32(cursor, EF_CONSTRUCTION, 1, MAX_EF_CONSTRUCTION, end)?);
        } else if keyword.eq_ignore_ascii_case(EF_RUNTIME) {
            if hnsw.ef_runtime.is_some() {
                return Err(CreateIndexError::duplicate_option(EF_RUNTIME, position));
            }
            hnsw.ef_runtime = Some(pair_u32(cursor, EF_RUNTIME, 1, MAX_EF_RUNTIME, end)?);
        } else {
            return Err(CreateIndexError::UnknownArgument {
                token: keyword.to_string(),
                position,
            });
        }
    }
    Ok(VectorIndexParams {
        base: base.finalize(field)?,
        algorithm: VectorAlgorithm::Hnsw(hnsw.finalize()),
    })
}

fn parse_flat_params(
    cursor: &mut ArgCursor,
    end: usize,
    field: &str,
) -> Result<VectorIndexParams, CreateIndexError> {
    let mut base = VectorBaseDraft::default();
    let mut flat = FlatDraft::default();
    while cursor.position() < end {
        let position = cursor.position();
        let keyword = cursor.take_token("vector parameters")?;
        if keyword.eq_ignore_ascii_case(DIM) {
            if base.dimensions.is_some() {
                return Err(CreateIndexError::duplicate_option(DIM, position));
            }
            base.dimensions = Some(pair_u32(cursor, DIM, 1, MAX_DIMENSIONS, end)?);
        } else if keyword.eq_ignore_ascii_case(DISTANCE_METRIC) {
            if base.distance_metric.is_some() {
                return Err(CreateIndexError::duplicate_option(DISTANCE_METRIC, position));
            }
            base.distance_metric =
                Some(pair_symbol(cursor, DISTANCE_METRIC, DISTANCE_METRICS, end)?);
        } else if keyword.eq_ignore_ascii_case(TYPE) {
            if base.data_type.is_some() {
                return Err(CreateIndexError::duplicate_option(TYPE, position));
            }
            base.data_type = Some(pair_symbol(cursor, TYPE, VECTOR_DATA_TYPES, end)?);
        } else if keyword.eq_ignore_ascii_case(INITIAL_CAP) {
            if base.initial_cap.is_some() {
                return Err(CreateIndexError::duplicate_option(INITIAL_CAP, position));
            }
            base.initial_cap = Some(pair_u32(cursor, INITIAL_CAP, 1, MAX_INITIAL_CAP, end)?);
        } else if keyword.eq_ignore_ascii_case(BLOCK_SIZE) {
            if flat.block_size.is_some() {
                return Err(CreateIndexError::duplicate_option(BLOCK_SIZE, position));
            }
            flat.block_size = Some(pair_u32(cursor, BLOCK_SIZE, 1, MAX_BLOCK_SIZE, end)?);
        } else {
            return Err(CreateIndexError::UnknownArgument {
                token: keyword.to_string(),
                position,
            });
        }
    }
    Ok(VectorIndexParams {
        base: base.finalize(field)?,
        algorithm: VectorAlgorithm::Flat(flat.finalize()),
    })
}

/// Take the value of a keyword/value pair, respecting the declared parameter
/// budget: a keyword whose value would fall outside it has no value.
fn pair_value<'a>(
    cursor: &mut ArgCursor<'a>,
    keyword: &'static str,
    end: usize,
) -> Result<(&'a str, usize), CreateIndexError> {
    if cursor.position() >= end {
        return Err(CreateIndexError::MissingRequiredValue {
            keyword: keyword.to_string(),
            position: cursor.position(),
        });
    }
    let position = cursor.position();
    let token = cursor.take_value(keyword)?;
    Ok((token, position))
}

fn pair_u32(
    cursor: &mut ArgCursor,
    keyword: &'static str,
    min: u32,
    max: u32,
    end: usize,
) -> Result<u32, CreateIndexError> {
    let (token, position) = pair_value(cursor, keyword, end)?;
    parse_u32(token, keyword, position, min, max)
}

fn pair_symbol<T: Copy>(
    cursor: &mut ArgCursor,
    keyword: &'static str,
    symbols: &[(&str, T)],
    end: usize,
) -> Result<T, CreateIndexError> {
    let (token, position) = pair_value(cursor, keyword, end)?;
    lookup_symbol(token, symbols).ok_or_else(|| CreateIndexError::InvalidValue {
        keyword: keyword.to_string(),
        token: token.to_string(),
        position,
        expected: expected_symbols(symbols),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|token| token.to_string()).collect()
    }

    fn parse(tokens: &[&str]) -> Result<FieldIndex, CreateIndexError> {
        let args = args(tokens);
        let mut cursor = ArgCursor::new(&args);
        let index = parse_vector_field(&mut cursor, "embedding")?;
        assert!(cursor.done(), "unconsumed tokens left behind");
        Ok(index)
    }

    #[test]
    fn test_parse_hnsw_with_all_parameters() {
        let index = parse(&[
            "HNSW",
            "14",
            "DIM",
            "128",
            "DISTANCE_METRIC",
            "COSINE",
            "TYPE",
            "FLOAT32",
            "INITIAL_CAP",
            "2000",
            "M",
            "32",
            "EF_CONSTRUCTION",
            "100",
            "EF_RUNTIME",
            "50",
        ])
        .unwrap();

        let FieldIndex::Vector(params) = index else {
            panic!("expected a vector index");
        };
        assert_eq!(params.base.dimensions, 128);
        assert_eq!(params.base.distance_metric, DistanceMetric::Cosine);
        assert_eq!(params.base.data_type, VectorDataType::Float32);
        assert_eq!(params.base.initial_cap, 2000);
        assert_eq!(
            params.algorithm,
            VectorAlgorithm::Hnsw(HnswParams {
                m: 32,
                ef_construction: 100,
                ef_runtime: 50
            })
        );
    }

    #[test]
    fn test_parse_hnsw_applies_defaults() {
        let index = parse(&[
            "HNSW", "6", "DIM", "768", "DISTANCE_METRIC", "L2", "TYPE", "FLOAT64",
        ])
        .unwrap();

        let FieldIndex::Vector(params) = index else {
            panic!("expected a vector index");
        };
        assert_eq!(params.base.initial_cap, default_initial_cap());
        assert_eq!(params.hnsw(), Some(&HnswParams::default()));
    }

    #[test]
    fn test_parse_flat_with_block_size() {
        let index = parse(&[
            "FLAT",
            "8",
            "DIM",
            "128",
            "DISTANCE_METRIC",
            "IP",
            "TYPE",
            "FLOAT32",
            "BLOCK_SIZE",
            "4096",
        ])
        .unwrap();

        let FieldIndex::Vector(params) = index else {
            panic!("expected a vector index");
        };
        assert_eq!(params.flat(), Some(&FlatParams { block_size: 4096 }));
    }

    #[test]
    fn test_parse_flat_applies_default_block_size() {
        let index = parse(&[
            "flat", "6", "dim", "16", "distance_metric", "l2", "type", "float32",
        ])
        .unwrap();

        let FieldIndex::Vector(params) = index else {
            panic!("expected a vector index");
        };
        assert_eq!(params.flat(), Some(&FlatParams::default()));
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = parse(&["WAVELET", "2", "DIM", "4"]).unwrap_err();

        assert!(matches!(
            err,
            CreateIndexError::InvalidValue { keyword, token, position: 0, .. }
                if keyword == VECTOR && token == "WAVELET"
        ));
    }

    #[test]
    fn test_missing_required_parameters() {
        let err = parse(&["HNSW", "4", "DISTANCE_METRIC", "L2", "TYPE", "FLOAT32"]).unwrap_err();
        assert!(matches!(
            err,
            CreateIndexError::MissingRequiredField { field, parameter: DIM } if field == "embedding"
        ));

        let err = parse(&["HNSW", "4", "DIM", "128", "DISTANCE_METRIC", "L2"]).unwrap_err();
        assert!(matches!(
            err,
            CreateIndexError::MissingRequiredField {
                parameter: TYPE,
                ..
            }
        ));

        let err = parse(&["FLAT", "2", "BLOCK_SIZE", "512"]).unwrap_err();
        assert!(matches!(
            err,
            CreateIndexError::MissingRequiredField { parameter: DIM, .. }
        ));
    }

    #[test]
    fn test_algorithm_keywords_are_scoped() {
        // BLOCK_SIZE belongs to FLAT, M to HNSW.
        let err = parse(&["HNSW", "2", "BLOCK_SIZE", "1024"]).unwrap_err();
        assert!(matches!(
            err,
            CreateIndexError::UnknownArgument { token, position: 2 } if token == "BLOCK_SIZE"
        ));

        let err = parse(&["FLAT", "2", "M", "16"]).unwrap_err();
        assert!(matches!(
            err,
            CreateIndexError::UnknownArgument { token, .. } if token == "M"
        ));
    }

    #[test]
    fn test_duplicate_parameter() {
        let err = parse(&["HNSW", "4", "DIM", "128", "DIM", "256"]).unwrap_err();

        assert!(matches!(
            err,
            CreateIndexError::DuplicateOption { keyword, position: 4 } if keyword == DIM
        ));
    }

    #[test]
    fn test_count_exceeding_remaining_tokens() {
        let err = parse(&["HNSW", "10", "DIM", "128"]).unwrap_err();

        assert!(matches!(
            err,
            CreateIndexError::UnexpectedEndOfInput {
                context: "vector parameters"
            }
        ));
    }

    #[test]
    fn test_odd_count_cuts_a_pair_short() {
        let args = args(&[
            "HNSW", "5", "DIM", "128", "DISTANCE_METRIC", "L2", "TYPE", "FLOAT32",
        ]);
        let mut cursor = ArgCursor::new(&args);

        let err = parse_vector_field(&mut cursor, "embedding").unwrap_err();
        assert!(matches!(
            err,
            CreateIndexError::MissingRequiredValue { keyword, position: 7 } if keyword == TYPE
        ));
    }

    #[test]
    fn test_count_bounds_the_parameter_list() {
        // Only the declared 6 tokens belong to the vector block; the rest is
        // left for the caller.
        let args = args(&[
            "HNSW", "6", "DIM", "128", "DISTANCE_METRIC", "L2", "TYPE", "FLOAT32", "category",
            "TAG",
        ]);
        let mut cursor = ArgCursor::new(&args);

        parse_vector_field(&mut cursor, "embedding").unwrap();
        assert_eq!(cursor.peek(), Some("category"));
    }

    #[test]
    fn test_zero_valued_parameters_are_out_of_range() {
        for keyword in ["DIM", "M", "EF_CONSTRUCTION", "EF_RUNTIME"] {
            let err = parse(&["HNSW", "2", keyword, "0"]).unwrap_err();
            assert!(
                matches!(err, CreateIndexError::InvalidRange { value: 0, min: 1, .. }),
                "{keyword} accepted zero"
            );
        }

        let err = parse(&["FLAT", "2", "BLOCK_SIZE", "0"]).unwrap_err();
        assert!(matches!(
            err,
            CreateIndexError::InvalidRange { value: 0, min: 1, .. }
        ));
    }

    #[test]
    fn test_dimensions_above_limit_are_out_of_range() {
        let err = parse(&["HNSW", "2", "DIM", "32769"]).unwrap_err();

        assert!(matches!(
            err,
            CreateIndexError::InvalidRange {
                value: 32_769,
                max: 32_768,
                ..
            }
        ));
    }
}
