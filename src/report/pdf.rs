//! PDF report renderer.
//!
//! Produces the assessment report: a title band, patient information in
//! insertion order, prediction results, recommendation bullets and a
//! generation timestamp. Layout is A4 with simple top-down line flow; a new
//! page is started when the cursor reaches the bottom margin.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rect, Rgb,
};

use crate::domain::{AssessmentMode, AssessmentResult, PatientInput};

use super::ReportError;

// printpdf 0.7 units are f32.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 14.0;
const BODY_SIZE_PT: f32 = 12.0;
const HEADING_SIZE_PT: f32 = 14.0;

/// File name convention for exported reports.
#[must_use]
pub fn report_filename(patient_id: &str) -> String {
    format!("CardioCare_Report_{patient_id}.pdf")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// The patient-input subset printed in the report, per mode, in the order it
/// appears on screen.
#[must_use]
pub fn patient_summary(mode: AssessmentMode, patient: &PatientInput) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("Patient ID", patient.id.clone()),
        ("Patient Name", patient.name.clone()),
        ("Age", patient.age.to_string()),
        ("Sex", patient.sex.to_string()),
        ("Blood Pressure", format!("{} mm Hg", patient.resting_bp)),
        ("Cholesterol", format!("{} mg/dl", patient.cholesterol)),
    ];
    match mode {
        AssessmentMode::EarlyWarning => {
            fields.push(("Fasting Blood Sugar", yes_no(patient.fasting_blood_sugar).to_string()));
            fields.push(("Max Heart Rate", patient.max_heart_rate.to_string()));
        }
        AssessmentMode::Comprehensive => {
            fields.push(("BMI", format!("{:.1}", patient.bmi)));
            fields.push(("Diabetes", yes_no(patient.diabetes).to_string()));
            fields.push(("Family History", yes_no(patient.family_history).to_string()));
        }
    }
    fields
}

/// Cursor that writes lines top-down and breaks pages at the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
    y: f32,
}

impl PageWriter<'_> {
    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < MARGIN_MM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
    }

    fn line(&mut self, text: &str, size: f32, bold: bool) {
        let advance = size * 0.6; // pt line height expressed in mm, roughly
        self.ensure_room(advance);
        let font = if bold { self.bold } else { self.regular };
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y), font);
        self.y -= advance;
    }

    fn heading(&mut self, text: &str) {
        self.ensure_room(HEADING_SIZE_PT);
        self.y -= 4.0;
        self.line(text, HEADING_SIZE_PT, true);
        self.y -= 1.0;
    }
}

/// Render the assessment report as PDF bytes.
///
/// Pure given its inputs apart from the trailing generation timestamp.
///
/// # Errors
/// Returns error only if the PDF backend fails; any well-formed result
/// renders.
pub fn render_report(
    patient_info: &[(&'static str, String)],
    result: &AssessmentResult,
) -> Result<Vec<u8>, ReportError> {
    let (doc, page, layer) = PdfDocument::new(
        "CardioCare AI - Cardiac Risk Assessment Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;
    let italic = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;

    let first = doc.get_page(page).get_layer(layer);

    // Title band, white on the house teal.
    first.set_fill_color(Color::Rgb(Rgb::new(0.0, 95.0 / 255.0, 115.0 / 255.0, None)));
    let band = Rect::new(
        Mm(0.0),
        Mm(PAGE_HEIGHT_MM - 22.0),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
    )
    .with_mode(PaintMode::Fill);
    first.add_rect(band);

    first.set_fill_color(Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None)));
    first.use_text(
        "CardioCare AI - Cardiac Risk Assessment Report",
        15.0,
        Mm(32.0),
        Mm(PAGE_HEIGHT_MM - 14.0),
        &bold,
    );
    first.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));

    let mut writer = PageWriter {
        doc: &doc,
        layer: first,
        regular: &regular,
        bold: &bold,
        y: PAGE_HEIGHT_MM - 34.0,
    };

    writer.heading("Patient Information");
    for (key, value) in patient_info {
        writer.line(&format!("{key}: {value}"), BODY_SIZE_PT, false);
    }

    writer.heading("Prediction Results");
    writer.line(
        &format!("Risk Level: {}", result.risk_label()),
        BODY_SIZE_PT,
        false,
    );
    writer.line(
        &format!("Probability: {}", result.probability_percent()),
        BODY_SIZE_PT,
        false,
    );
    writer.line(
        &format!("Assessment Type: {}", result.mode.report_label()),
        BODY_SIZE_PT,
        false,
    );

    writer.heading("Clinical Recommendations");
    for recommendation in &result.recommendations {
        writer.line(&format!("- {recommendation}"), BODY_SIZE_PT, false);
    }

    writer.y -= 6.0;
    writer.ensure_room(16.0);
    let footer_y = writer.y;
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    writer.layer.use_text(
        format!("Report generated on: {generated}"),
        10.0,
        Mm(MARGIN_MM),
        Mm(footer_y),
        &italic,
    );
    writer.layer.use_text(
        "CardioCare AI - Advanced Cardiac Risk Assessment",
        10.0,
        Mm(60.0),
        Mm(footer_y - 6.0),
        &italic,
    );

    doc.save_to_bytes().map_err(|e| ReportError::Pdf(e.to_string()))
}
