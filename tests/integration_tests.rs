use shannon_fano::{Alphabet, CodeTable, ShannonFanoCodec, SfError};
use std::fs;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn end_to_end_generate_encode_decode_properties() {
    let codec =
        ShannonFanoCodec::from_strings("A,B,C,D", "0.4,0.3,0.2,0.1").unwrap();

    let table = codec.table();
    assert_eq!(table.len(), 4);
    assert!(table.is_prefix_free());

    let encoded = codec.encode_text("ADBC").unwrap();
    assert!(encoded.is_complete());
    assert_eq!(
        codec.decode_str(&encoded.bits.to_string()).unwrap(),
        "ADBC"
    );

    let props = codec.properties();
    assert!(props.average_length >= props.entropy - 1e-12);
    assert!(props.kraft_satisfied);
}

#[test]
fn alphabet_loaded_from_plain_text_file() {
    // File contents are raw comma-separated strings; surrounding
    // whitespace (including the trailing newline) is trimmed.
    let dir = tempdir().unwrap();
    let symbols_path = dir.path().join("symbols.txt");
    let probabilities_path = dir.path().join("probabilities.txt");
    {
        let mut f = fs::File::create(&symbols_path).unwrap();
        writeln!(f, "A, B, C").unwrap();
        let mut f = fs::File::create(&probabilities_path).unwrap();
        writeln!(f, "0.5, 0.25, 0.25").unwrap();
    }

    let raw_symbols = fs::read_to_string(&symbols_path).unwrap();
    let raw_probabilities = fs::read_to_string(&probabilities_path).unwrap();
    let alphabet = Alphabet::parse(&raw_symbols, &raw_probabilities).unwrap();
    assert_eq!(alphabet.len(), 3);

    let codec = ShannonFanoCodec::new(alphabet).unwrap();
    let encoded = codec.encode_text("CAB").unwrap();
    assert_eq!(codec.decode_str(&encoded.bits.to_string()).unwrap(), "CAB");
}

#[test]
fn failed_build_leaves_previous_table_usable() {
    let codec = ShannonFanoCodec::from_strings("A,B", "0.5,0.5").unwrap();

    // A rejected replacement must not disturb the existing codec.
    let err = ShannonFanoCodec::from_strings("A,B", "0.5,0.4").unwrap_err();
    assert!(matches!(err, SfError::InvalidProbabilities(_)));

    assert_eq!(codec.decode_str("01").unwrap(), "AB");
}

#[test]
fn partial_match_encoding_reports_skipped_symbols() {
    let codec =
        ShannonFanoCodec::from_strings("a,b,c", "0.5,0.3,0.2").unwrap();
    let encoded = codec.encode_text("ab?cb!").unwrap();
    assert!(!encoded.is_complete());
    let skipped: Vec<String> =
        encoded.unmatched.iter().map(|s| s.to_string()).collect();
    assert_eq!(skipped, ["!", "?"]);
    // Skipped symbols contribute nothing to the output.
    let clean = codec.encode_text("abcb").unwrap();
    assert_eq!(encoded.bits, clean.bits);
}

#[test]
fn single_symbol_alphabet_round_trip_is_degenerate() {
    let codec = ShannonFanoCodec::from_strings("A", "1.0").unwrap();
    assert_eq!(
        codec.table().get(&"A".into()).unwrap().to_string(),
        ""
    );
    // The only codeword is empty, so encoding emits no bits at all.
    assert_eq!(
        codec.encode_text("AAA").unwrap_err(),
        SfError::EmptyEncodingResult
    );
    // And an empty sequence decodes to empty text.
    assert_eq!(codec.decode_str("").unwrap(), "");

    let props = codec.properties();
    assert_eq!(props.average_length, 0.0);
    assert_eq!(props.entropy, 0.0);
}

#[test]
fn decoding_garbage_reports_the_residue() {
    let alphabet = Alphabet::parse("A,B,C,D", "0.4,0.3,0.2,0.1").unwrap();
    let table = CodeTable::build(&alphabet).unwrap();
    let err = shannon_fano::decode_str(&table, "0011").unwrap_err();
    assert_eq!(
        err,
        SfError::IncompleteTrailingBits {
            residue: "11".to_string()
        }
    );
}
