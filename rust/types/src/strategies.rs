use crate::{
    DistanceMetric, FlatParams, HnswParams, KeyDataType, TagIndexParams, VectorBaseParams,
    VectorDataType, MAX_DIMENSIONS, MAX_EF_CONSTRUCTION, MAX_EF_RUNTIME, MAX_HNSW_M,
    MAX_INITIAL_CAP,
};
use proptest::prelude::*;

impl Arbitrary for DistanceMetric {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(DistanceMetric::L2),
            Just(DistanceMetric::Cosine),
            Just(DistanceMetric::Ip),
        ]
        .boxed()
    }
}

impl Arbitrary for VectorDataType {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(VectorDataType::Float32),
            Just(VectorDataType::Float16),
            Just(VectorDataType::BFloat16),
            Just(VectorDataType::Float64),
        ]
        .boxed()
    }
}

impl Arbitrary for KeyDataType {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![Just(KeyDataType::Hash), Just(KeyDataType::Json)].boxed()
    }
}

impl Arbitrary for VectorBaseParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            1..=MAX_DIMENSIONS,
            proptest::arbitrary::any::<DistanceMetric>(),
            proptest::arbitrary::any::<VectorDataType>(),
            1..=MAX_INITIAL_CAP,
        )
            .prop_map(
                |(dimensions, distance_metric, data_type, initial_cap)| VectorBaseParams {
                    dimensions,
                    distance_metric,
                    data_type,
                    initial_cap,
                },
            )
            .boxed()
    }
}

impl Arbitrary for HnswParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            1..=MAX_HNSW_M,
            1..=MAX_EF_CONSTRUCTION,
            1..=MAX_EF_RUNTIME,
        )
            .prop_map(|(m, ef_construction, ef_runtime)| HnswParams {
                m,
                ef_construction,
                ef_runtime,
            })
            .boxed()
    }
}

impl Arbitrary for FlatParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (1..=crate::MAX_BLOCK_SIZE)
            .prop_map(|block_size| FlatParams { block_size })
            .boxed()
    }
}

impl Arbitrary for TagIndexParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            prop_oneof![Just(','), Just('|'), Just(';'), Just('/')],
            proptest::bool::ANY,
        )
            .prop_map(|(separator, case_sensitive)| TagIndexParams {
                separator,
                case_sensitive,
            })
            .boxed()
    }
}
