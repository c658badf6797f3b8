use mathcast::domain::ContentType;

#[test]
fn given_pdf_extension_when_detecting_content_type_then_returns_pdf() {
    assert_eq!(ContentType::from_filename("notes.pdf"), Some(ContentType::Pdf));
    assert_eq!(ContentType::from_filename("NOTES.PDF"), Some(ContentType::Pdf));
}

#[test]
fn given_other_extension_when_detecting_content_type_then_returns_none() {
    assert_eq!(ContentType::from_filename("notes.txt"), None);
    assert_eq!(ContentType::from_filename("pdf"), None);
    assert_eq!(ContentType::from_filename("archive.pdf.zip"), None);
}

#[test]
fn given_pdf_when_getting_mime_then_returns_application_pdf() {
    assert_eq!(ContentType::Pdf.as_mime(), "application/pdf");
}
