mod common;

use common::fixtures::*;
use common::{TestResult, data_exporter, init_logging, single_file, test_exporter};
use rentdesk::traits::InMemoryCaptureSource;
use rentdesk::{
    DownloadSink, ExportError, ExportFormat, ExportOptions, ExporterBuilder, FilesystemSink,
    MemorySink, RenderedFile,
};
use std::sync::Arc;

#[tokio::test]
async fn test_csv_export_delivers_exact_file() -> TestResult {
    init_logging();
    let (exporter, sink) = data_exporter();

    exporter
        .export_data(
            price_rows(),
            ExportOptions::new(ExportFormat::Csv).with_file_name("prices"),
        )
        .await?;

    let file = single_file(&sink);
    assert_eq!(file.file_name, "prices.csv");
    assert_eq!(file.mime_type, "text/csv;charset=utf-8");
    assert_eq!(
        String::from_utf8(file.bytes)?,
        "name,price\r\nA,10\r\nB,20\r\nC,30\r\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_default_file_name_uses_export_date() -> TestResult {
    let (exporter, sink) = data_exporter();
    exporter
        .export_data(price_rows(), ExportOptions::new(ExportFormat::Csv))
        .await?;
    assert_eq!(single_file(&sink).file_name, "export_2024-03-15.csv");
    Ok(())
}

#[tokio::test]
async fn test_blank_file_name_falls_back_to_default() -> TestResult {
    let (exporter, sink) = data_exporter();
    exporter
        .export_data(
            price_rows(),
            ExportOptions::new(ExportFormat::Xlsx).with_file_name("   "),
        )
        .await?;
    assert_eq!(single_file(&sink).file_name, "export_2024-03-15.xlsx");
    Ok(())
}

#[tokio::test]
async fn test_empty_input_is_rejected_without_delivery() {
    let (exporter, sink) = data_exporter();
    for format in [ExportFormat::Pdf, ExportFormat::Xlsx, ExportFormat::Csv] {
        let result = exporter
            .export_data(Vec::new(), ExportOptions::new(format))
            .await;
        assert!(matches!(result, Err(ExportError::NoData)), "{}", format);
    }
    assert!(sink.files().is_empty());
}

#[tokio::test]
async fn test_each_format_gets_extension_and_mime_type() -> TestResult {
    let (exporter, sink) = data_exporter();
    for format in [ExportFormat::Pdf, ExportFormat::Xlsx, ExportFormat::Csv] {
        exporter
            .export_data(
                rental_rows(5),
                ExportOptions::new(format).with_file_name("rentals"),
            )
            .await?;
    }

    let files = sink.files();
    let summary: Vec<(&str, &str)> = files
        .iter()
        .map(|f| (f.file_name.as_str(), f.mime_type))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("rentals.pdf", "application/pdf"),
            (
                "rentals.xlsx",
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            ("rentals.csv", "text/csv;charset=utf-8"),
        ]
    );
    assert!(files[0].bytes.starts_with(b"%PDF-"));
    assert!(files[1].bytes.starts_with(b"PK"));
    Ok(())
}

#[tokio::test]
async fn test_unknown_element_is_reported() {
    let (exporter, sink) = data_exporter();
    let result = exporter
        .export_element_to_document("missing-chart", ExportOptions::new(ExportFormat::Pdf))
        .await;

    match result {
        Err(ExportError::ElementNotFound(id)) => assert_eq!(id, "missing-chart"),
        other => panic!("expected ElementNotFound, got {:?}", other),
    }
    assert!(sink.files().is_empty());
}

#[tokio::test]
async fn test_element_export_is_always_pdf() -> TestResult {
    let capture = Arc::new(InMemoryCaptureSource::new());
    capture.insert("revenue-chart", solid_image(400, 200));
    let (exporter, sink) = test_exporter(capture, None);

    exporter
        .export_element_to_document(
            "revenue-chart",
            ExportOptions::new(ExportFormat::Csv).with_file_name("chart"),
        )
        .await?;

    let file = single_file(&sink);
    assert_eq!(file.file_name, "chart.pdf");
    assert_eq!(file.mime_type, "application/pdf");
    assert!(file.bytes.starts_with(b"%PDF-"));
    Ok(())
}

#[derive(Debug)]
struct FailingSink;

#[async_trait::async_trait]
impl DownloadSink for FailingSink {
    async fn save(&self, _file: RenderedFile) -> std::io::Result<()> {
        Err(std::io::Error::other("disk full"))
    }
}

#[tokio::test]
async fn test_sink_failure_names_the_file() {
    let exporter = ExporterBuilder::new()
        .with_sink(Arc::new(FailingSink))
        .with_fixed_time(common::fixed_time())
        .build()
        .unwrap();

    let result = exporter
        .export_data(price_rows(), ExportOptions::new(ExportFormat::Csv))
        .await;
    match result {
        Err(ExportError::Sink { file_name, source }) => {
            assert_eq!(file_name, "export_2024-03-15.csv");
            assert_eq!(source.to_string(), "disk full");
        }
        other => panic!("expected sink error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_filesystem_sink_writes_into_output_dir() -> TestResult {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("exports");
    let exporter = ExporterBuilder::new()
        .with_sink(Arc::new(FilesystemSink::new(&out)))
        .with_fixed_time(common::fixed_time())
        .build()?;

    exporter
        .export_data(
            price_rows(),
            ExportOptions::new(ExportFormat::Csv).with_file_name("prices"),
        )
        .await?;

    let written = std::fs::read_to_string(out.join("prices.csv"))?;
    assert!(written.starts_with("name,price\r\n"));
    Ok(())
}

#[tokio::test]
async fn test_invalid_footer_template_fails_the_export() {
    let (exporter, sink) = data_exporter();
    let mut branding = branding("Acme Rentals");
    branding.footer = Some("Page {{page".to_string());

    let result = exporter
        .export_data(
            price_rows(),
            ExportOptions::new(ExportFormat::Pdf).with_branding(branding),
        )
        .await;
    assert!(matches!(result, Err(ExportError::Render(_))));
    assert!(sink.files().is_empty());
}

#[test]
fn test_memory_sink_starts_empty() {
    assert!(MemorySink::new().files().is_empty());
}
