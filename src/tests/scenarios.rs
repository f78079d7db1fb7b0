#[cfg(test)]
mod tests {
    use crate::ComplicationType;
    use crate::{from_wire_type_list, from_wire_types, to_wire_types};

    #[test]
    fn short_text_there_and_back() {
        let code = ComplicationType::ShortText.wire_type();
        assert_eq!(ComplicationType::from_wire_type(code), ComplicationType::ShortText);
    }

    #[test]
    fn out_of_range_codes() {
        assert_eq!(ComplicationType::from_wire_type(-1), ComplicationType::Empty);
        assert_eq!(ComplicationType::from_wire_type(9999), ComplicationType::Empty);
    }

    #[test]
    fn encode_all_in_order() {
        let got = to_wire_types(vec![
            ComplicationType::NoData,
            ComplicationType::LongText,
            ComplicationType::NoPermission,
        ]);
        assert_eq!(
            got,
            vec![
                ComplicationType::NoData.wire_type(),
                ComplicationType::LongText.wire_type(),
                ComplicationType::NoPermission.wire_type(),
            ]
        );
    }

    #[test]
    fn encode_all_accepts_unordered_collections() {
        let set: std::collections::HashSet<_> = [ComplicationType::SmallImage].into();
        assert_eq!(to_wire_types(set), vec![7]);
    }

    #[test]
    fn decode_all_in_order() {
        let codes = [
            ComplicationType::Empty.wire_type(),
            42,
            ComplicationType::SmallImage.wire_type(),
        ];
        let expected = vec![
            ComplicationType::Empty,
            ComplicationType::Empty,
            ComplicationType::SmallImage,
        ];
        assert_eq!(from_wire_type_list(&codes), expected);
        assert_eq!(from_wire_types(&codes).into_vec(), expected);
    }

    #[test]
    fn duplicates_are_kept() {
        let codes = [3, 3, 0, 3];
        assert_eq!(from_wire_type_list(&codes).len(), 4);
        assert_eq!(
            to_wire_types(from_wire_type_list(&codes)),
            vec![3, 3, 2, 3]
        );
    }
}
