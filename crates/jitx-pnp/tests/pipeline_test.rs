use std::path::{Path, PathBuf};

use jitx_pnp::jitx_xml::JitxXmlError;
use jitx_pnp::{
    OutputFormat, OutputTarget, PnpError, PnpOptions, Warning, pick_and_place,
    pick_and_place_with_sink,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn options(format: OutputFormat) -> PnpOptions {
    PnpOptions {
        format,
        output: None,
    }
}

#[test]
fn single_resistor_csv() {
    let out = pick_and_place(&fixture("single_resistor.xml"), &PnpOptions::default()).unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "RefDes,X,Y,Rotation,PN,Package,Side",
            "R1,1.000,2.000,90.000,RC0402FR-07100KL,0402,Top",
        ]
    );
}

#[test]
fn two_sided_board_is_joined_sorted_and_sanitized() {
    let mut warnings: Vec<Warning> = Vec::new();
    let out = pick_and_place_with_sink(
        &fixture("two_sided.xml"),
        &options(OutputFormat::Csv),
        &mut warnings,
    )
    .unwrap();

    assert_eq!(
        out,
        "RefDes,X,Y,Rotation,PN,Package,Side\r\n\
         C2,3.000,4.500,0.000,GRM155R71C104KA88D,0402,Top\r\n\
         C10,5.125,0.000,180.000,,0603,Top\r\n\
         U10,-12.250,8.000,270.000,\"'=HYPERLINK(\"\"x\"\")\",QFN-32,Bottom\r\n"
    );

    assert_eq!(
        warnings,
        vec![
            Warning::MissingDesignator,
            Warning::MissingPose {
                designator: "TP1".into()
            },
        ]
    );
}

#[test]
fn tsv_and_txt_formats() {
    let input = fixture("single_resistor.xml");

    let tsv = pick_and_place(&input, &options(OutputFormat::Tsv)).unwrap();
    assert_eq!(
        tsv,
        "RefDes\tX\tY\tRotation\tPN\tPackage\tSide\r\n\
         R1\t1.000\t2.000\t90.000\tRC0402FR-07100KL\t0402\tTop\r\n"
    );

    let txt = pick_and_place(&input, &options(OutputFormat::Txt)).unwrap();
    assert_eq!(
        txt,
        concat!(
            "REF DES  X COORD  Y COORD  ROT     PN                PACKAGE  SIDE\n",
            "-------  -------  -------  ------  ----------------  -------  ----\n",
            "R1       1.000    2.000    90.000  RC0402FR-07100KL  0402     Top \n",
        )
    );
}

#[test]
fn repeated_runs_are_byte_identical() {
    let input = fixture("two_sided.xml");
    for format in [OutputFormat::Csv, OutputFormat::Tsv, OutputFormat::Txt] {
        let first = pick_and_place_with_sink(&input, &options(format), &mut ()).unwrap();
        let second = pick_and_place_with_sink(&input, &options(format), &mut ()).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn combined_output_is_written_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("nested/out/pnp.csv");

    let opts = PnpOptions {
        format: OutputFormat::Csv,
        output: Some(OutputTarget {
            path: out_path.clone(),
            split_sides: false,
        }),
    };
    let result = pick_and_place(&fixture("two_sided.xml"), &opts).unwrap();

    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), result);
}

#[test]
fn split_sides_writes_one_file_per_populated_side() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("pnp.csv");

    let opts = PnpOptions {
        format: OutputFormat::Csv,
        output: Some(OutputTarget {
            path: out_path.clone(),
            split_sides: true,
        }),
    };
    let result = pick_and_place(&fixture("two_sided.xml"), &opts).unwrap();

    // Return value is still the combined view
    assert!(result.starts_with("RefDes,X,Y,Rotation,PN,Package,Side\r\n"));
    assert!(!out_path.exists());

    let top = std::fs::read_to_string(dir.path().join("pnp_top.csv")).unwrap();
    assert_eq!(
        top,
        "RefDes,X,Y,Rotation,PN,Package\r\n\
         C2,3.000,4.500,0.000,GRM155R71C104KA88D,0402\r\n\
         C10,5.125,0.000,180.000,,0603\r\n"
    );

    let bottom = std::fs::read_to_string(dir.path().join("pnp_bottom.csv")).unwrap();
    assert_eq!(
        bottom,
        "RefDes,X,Y,Rotation,PN,Package\r\n\
         U10,-12.250,8.000,270.000,\"'=HYPERLINK(\"\"x\"\")\",QFN-32\r\n"
    );
}

#[test]
fn split_sides_skips_empty_side() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("pnp.txt");

    let opts = PnpOptions {
        format: OutputFormat::Txt,
        output: Some(OutputTarget {
            path: out_path,
            split_sides: true,
        }),
    };
    pick_and_place(&fixture("single_resistor.xml"), &opts).unwrap();

    let top = std::fs::read_to_string(dir.path().join("pnp_top.txt")).unwrap();
    assert!(top.starts_with("REF DES  X COORD  Y COORD  ROT     PN                PACKAGE\n"));
    assert!(!top.contains("SIDE"));
    assert!(!dir.path().join("pnp_bottom.txt").exists());
}

#[test]
fn compressed_input_is_supported() {
    let dir = tempfile::tempdir().unwrap();
    let xml = std::fs::read(fixture("single_resistor.xml")).unwrap();
    let input = dir.path().join("board.xml.zst");
    std::fs::write(&input, zstd::encode_all(xml.as_slice(), 3).unwrap()).unwrap();

    let out = pick_and_place(&input, &PnpOptions::default()).unwrap();
    assert!(out.contains("R1,1.000,2.000,90.000,RC0402FR-07100KL,0402,Top"));
}

#[test]
fn empty_board_yields_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.xml");
    std::fs::write(&input, "<DESIGN><BOARD/></DESIGN>").unwrap();

    let mut warnings: Vec<Warning> = Vec::new();
    let out = pick_and_place_with_sink(&input, &PnpOptions::default(), &mut warnings).unwrap();

    assert_eq!(out, "RefDes,X,Y,Rotation,PN,Package,Side\r\n");
    assert_eq!(warnings, vec![Warning::NoInstances { path: input }]);
}

#[test]
fn malformed_xml_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.xml");
    std::fs::write(&input, "<DESIGN><BOARD></DESIGN>").unwrap();

    let err = pick_and_place(&input, &PnpOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        PnpError::Document {
            source: JitxXmlError::XmlParse(_),
            ..
        }
    ));
}

#[test]
fn missing_board_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("no_board.xml");
    std::fs::write(&input, "<DESIGN><SCHEMATIC/></DESIGN>").unwrap();

    let err = pick_and_place(&input, &PnpOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        PnpError::Document {
            source: JitxXmlError::MissingElement("BOARD"),
            ..
        }
    ));
    assert!(err.to_string().contains("no_board.xml"));
}

#[test]
fn doctype_header_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("doctype.xml");
    std::fs::write(
        &input,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE DESIGN>
<DESIGN>
  <BOARD>
    <INST DESIGNATOR="R1" SIDE="Top" PACKAGE="0402$1"><POSE X="1" Y="2" ANGLE="90"/></INST>
  </BOARD>
</DESIGN>"#,
    )
    .unwrap();

    let out = pick_and_place(&input, &PnpOptions::default()).unwrap();
    assert_eq!(
        out,
        "RefDes,X,Y,Rotation,PN,Package,Side\r\n\
         R1,1.000,2.000,90.000,,0402,Top\r\n"
    );
}

#[test]
fn latin1_input_is_decoded() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("latin1.xml");
    let mut xml = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<DESIGN><BOARD>".to_vec();
    xml.extend_from_slice(b"<INST DESIGNATOR=\"L1\" SIDE=\"Top\" PACKAGE=\"1\xB5H$2\">");
    xml.extend_from_slice(b"<POSE X=\"0\" Y=\"0\" ANGLE=\"0\"/></INST></BOARD></DESIGN>");
    std::fs::write(&input, &xml).unwrap();

    let out = pick_and_place(&input, &PnpOptions::default()).unwrap();
    assert!(out.ends_with("L1,0.000,0.000,0.000,,1\u{b5}H,Top\r\n"), "{out}");
}

#[test]
fn unsupported_declared_encoding_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sjis.xml");
    std::fs::write(
        &input,
        "<?xml version=\"1.0\" encoding=\"Shift_JIS\"?><DESIGN><BOARD/></DESIGN>",
    )
    .unwrap();

    let err = pick_and_place(&input, &PnpOptions::default()).unwrap_err();
    assert!(matches!(err, PnpError::UnsupportedEncoding { .. }));
    assert!(err.to_string().contains("Shift_JIS"));
}
