#[cfg(test)]
mod tests {
    use crate::tests::test_utils::isolated;
    use crate::{SnowflakeConfig, MAX_LAYOUT_BITS, TIMESTAMP_BITS};

    fn config(node_bits: u8, sequence_bits: u8) -> SnowflakeConfig {
        SnowflakeConfig::builder()
            .node_bits(node_bits)
            .unwrap()
            .sequence_bits(sequence_bits)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_ids_are_53_bit_safe() {
        assert_eq!(1 + TIMESTAMP_BITS + MAX_LAYOUT_BITS, 54);
        for (node_bits, sequence_bits) in [(10, 2), (2, 10), (6, 6), (1, 11)] {
            let cfg = config(node_bits, sequence_bits);
            let g = isolated(cfg.max_node_id(), cfg);
            for _ in 0..10 {
                let id = g.generate().unwrap();
                assert!(id < 1u64 << 53, "id {} exceeds 2^53", id);
            }
        }
    }

    #[test]
    fn test_max_node_id_survives_packing() {
        let cfg = config(10, 2);
        let g = isolated(1023, cfg);
        let id = g.generate().unwrap();
        let (timestamp, node, sequence) = g.extractor().decompose(id);

        assert!(timestamp > 0);
        assert_eq!(node, 1023);
        assert!(sequence < cfg.max_sequence_id());
    }

    #[test]
    fn test_node_bits_do_not_leak_into_sequence() {
        let cfg = config(2, 10);
        let g = isolated(0b11, cfg);
        let id = g.generate().unwrap();

        assert_eq!(id & 0x3FF, g.extractor().sequence(id) as u64);
        assert_eq!((id >> 10) & 0b11, 0b11);
        assert_eq!(id >> 12, g.extractor().timestamp(id));
    }
}
