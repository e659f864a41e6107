//! Single-pass invoice page renderer.
//!
//! Draws the fixed header/company/customer regions, the item table, and the
//! computed totals block onto a [`Surface`]. Every vertical position after
//! the table is relative to the last drawn item row, so the totals block
//! sits immediately below the table regardless of item count.

use paperbill_core::Money;
use paperbill_invoicing::{Invoice, InvoiceTotals};

use crate::error::LayoutError;
use crate::geometry::{
    self, BODY_SIZE, CELL_INSET, COLUMN_DIVIDERS, COMPANY_BLOCK, CUSTOMER_BLOCK_TOP,
    CUSTOMER_LINE_STEP, DETAILS_ROWS, FOOTNOTE_SIZE, HEADER_BASELINE, MARGIN, RIGHT_EDGE,
    RULE_WIDTH, TABLE_BOTTOM, TABLE_HEADER_BASELINE, TABLE_TOP, TITLE_SIZE,
    TOTALS_FOOTNOTE_OFFSET, TOTALS_ROW_OFFSETS, TOTALS_RULE_OFFSET,
};
use crate::surface::{Color, Surface, TextStyle};

const COLUMN_HEADERS: [&str; 4] = ["QTY", "ITEM", "PRICE", "AMOUNT"];
const TOTALS_LABELS: [&str; 3] = ["SUBTOTAL", "TAX", "TOTAL"];

fn currency(amount: Money) -> String {
    format!("${amount}")
}

/// Render one invoice onto `surface`.
///
/// Fails only when the item list cannot fit on the single fixed-size page;
/// in that case nothing is drawn.
pub fn render_invoice<S: Surface>(
    invoice: &Invoice,
    totals: &InvoiceTotals,
    surface: &mut S,
) -> Result<(), LayoutError> {
    let capacity = geometry::max_line_items();
    if invoice.items().len() > capacity {
        return Err(LayoutError::PageOverflow {
            items: invoice.items().len(),
            capacity,
        });
    }

    draw_header(invoice, surface);
    draw_company_block(invoice, surface);
    draw_details(invoice, surface);
    draw_customer_block(invoice, surface);
    draw_item_table(invoice, surface);
    draw_totals(invoice, totals, surface);

    Ok(())
}

fn draw_header(invoice: &Invoice, surface: &mut impl Surface) {
    surface.draw_text(
        &invoice.company.name,
        MARGIN,
        HEADER_BASELINE,
        &TextStyle::bold(BODY_SIZE),
    );
    // The title hangs a quarter of the company-name font size below the
    // shared header baseline.
    surface.draw_text(
        "INVOICE",
        RIGHT_EDGE,
        HEADER_BASELINE + BODY_SIZE / 4.0,
        &TextStyle::bold(TITLE_SIZE)
            .right_aligned()
            .colored(Color::GREY),
    );
}

fn draw_company_block(invoice: &Invoice, surface: &mut impl Surface) {
    let company = &invoice.company;
    let lines = [
        company.address_lines[0].clone(),
        company.address_lines[1].clone(),
        format!("Phone: {}", company.phone),
        format!("Fax: {}", company.fax),
    ];
    let style = TextStyle::normal(BODY_SIZE);
    for (line, y) in lines.iter().zip(COMPANY_BLOCK) {
        surface.draw_text(line, MARGIN, y, &style);
    }
}

fn draw_details(invoice: &Invoice, surface: &mut impl Surface) {
    let details = &invoice.details;
    let style = TextStyle::normal(BODY_SIZE).right_aligned();
    surface.draw_text(
        &format!("Invoice No: {}", details.number),
        RIGHT_EDGE,
        DETAILS_ROWS[0],
        &style,
    );
    surface.draw_text(
        &format!("Date: {}", details.date),
        RIGHT_EDGE,
        DETAILS_ROWS[1],
        &style,
    );
}

fn draw_customer_block(invoice: &Invoice, surface: &mut impl Surface) {
    surface.draw_text(
        "BILLED TO",
        MARGIN,
        CUSTOMER_BLOCK_TOP,
        &TextStyle::bold(BODY_SIZE),
    );

    let customer = &invoice.customer;
    let style = TextStyle::normal(BODY_SIZE);
    let lines = [&customer.name, &customer.address, &customer.phone];
    for (index, line) in lines.into_iter().enumerate() {
        let y = CUSTOMER_BLOCK_TOP + (index + 1) as f32 * CUSTOMER_LINE_STEP;
        surface.draw_text(line, MARGIN, y, &style);
    }
}

fn draw_item_table(invoice: &Invoice, surface: &mut impl Surface) {
    surface.draw_rect(
        MARGIN,
        TABLE_TOP,
        RIGHT_EDGE - MARGIN,
        TABLE_BOTTOM - TABLE_TOP,
        RULE_WIDTH,
    );
    for x in COLUMN_DIVIDERS {
        surface.draw_line(x, TABLE_TOP, x, TABLE_BOTTOM, RULE_WIDTH);
    }

    let header = TextStyle::bold(BODY_SIZE);
    let header_right = TextStyle::bold(BODY_SIZE).right_aligned();
    let [qty_divider, _, price_divider] = COLUMN_DIVIDERS;
    surface.draw_text(
        COLUMN_HEADERS[0],
        MARGIN + CELL_INSET,
        TABLE_HEADER_BASELINE,
        &header,
    );
    surface.draw_text(
        COLUMN_HEADERS[1],
        qty_divider + CELL_INSET,
        TABLE_HEADER_BASELINE,
        &header,
    );
    surface.draw_text(
        COLUMN_HEADERS[2],
        price_divider - CELL_INSET,
        TABLE_HEADER_BASELINE,
        &header_right,
    );
    surface.draw_text(
        COLUMN_HEADERS[3],
        RIGHT_EDGE - CELL_INSET,
        TABLE_HEADER_BASELINE,
        &header_right,
    );

    let cell = TextStyle::normal(BODY_SIZE);
    let cell_right = TextStyle::normal(BODY_SIZE).right_aligned();
    for (index, item) in invoice.items().iter().enumerate() {
        let y = geometry::row_y(index);
        surface.draw_text(&item.quantity().to_string(), MARGIN + CELL_INSET, y, &cell);
        surface.draw_text(item.title(), qty_divider + CELL_INSET, y, &cell);
        surface.draw_text(
            &currency(item.unit_price()),
            price_divider - CELL_INSET,
            y,
            &cell_right,
        );
        surface.draw_text(
            &currency(item.line_total()),
            RIGHT_EDGE - CELL_INSET,
            y,
            &cell_right,
        );
    }
}

fn draw_totals(invoice: &Invoice, totals: &InvoiceTotals, surface: &mut impl Surface) {
    let last_row = geometry::last_row_y(invoice.items().len());
    let rule_y = last_row + TOTALS_RULE_OFFSET;
    surface.draw_line(MARGIN, rule_y, RIGHT_EDGE, rule_y, RULE_WIDTH);

    let [_, _, price_divider] = COLUMN_DIVIDERS;
    let label = TextStyle::bold(BODY_SIZE).right_aligned();
    let value = TextStyle::normal(BODY_SIZE).right_aligned();
    let amounts = [totals.subtotal, totals.tax, totals.total];
    for ((name, amount), offset) in TOTALS_LABELS.into_iter().zip(amounts).zip(TOTALS_ROW_OFFSETS)
    {
        let y = last_row + offset;
        surface.draw_text(name, price_divider - CELL_INSET, y, &label);
        surface.draw_text(&currency(amount), RIGHT_EDGE - CELL_INSET, y, &value);
    }

    surface.draw_text(
        &format!("Tax rate: {}", totals.tax_rate),
        RIGHT_EDGE - CELL_INSET,
        last_row + TOTALS_FOOTNOTE_OFFSET,
        &TextStyle::normal(FOOTNOTE_SIZE).right_aligned(),
    );
}
