use complication_types::{Codec, ComplicationType, TypeList, WireConfig, WireTypeCodec};
use proptest::prelude::*;
use std::io::Cursor;

proptest! {
    #[test]
    fn frames_of_arbitrary_codes_decode_leniently(codes in prop::collection::vec(any::<i32>(), 0..32)) {
        let mut buf = (codes.len() as u32).to_le_bytes().to_vec();
        for c in &codes {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        let got = TypeList::decode_from(Cursor::new(&buf), &WireConfig::default()).unwrap();
        prop_assert_eq!(got.types, complication_types::from_wire_type_list(&codes));
    }
}

#[test]
fn codec_reads_consecutive_frames() {
    let codec = WireTypeCodec::default();
    let first = vec![ComplicationType::ShortText];
    let second = vec![ComplicationType::LongText, ComplicationType::NoData];

    let mut buf = Vec::new();
    codec.encode_into(&first, &mut buf).unwrap();
    codec.encode_into(&second, &mut buf).unwrap();

    let mut r = Cursor::new(buf);
    assert_eq!(codec.decode_from(&mut r).unwrap(), first);
    assert_eq!(codec.decode_from(&mut r).unwrap(), second);
}
