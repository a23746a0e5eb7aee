use crate::document::canvas::{Canvas, Color};
use crate::models::TransactionReceipt;

// A4 in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 40.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const BRAND_COLOR: Color = Color::rgb(88, 28, 135);
const BAND_COLOR: Color = Color::rgb(243, 232, 255);
const ROW_SHADE: Color = Color::rgb(245, 245, 245);
const WHITE: Color = Color::rgb(255, 255, 255);
const BLACK: Color = Color::rgb(17, 17, 17);
const SUCCESS: Color = Color::rgb(22, 163, 74);

const HEADER_HEIGHT: f32 = 70.0;
const BAND_HEIGHT: f32 = 26.0;
const ROW_HEIGHT: f32 = 18.0;
const BOX_HEIGHT: f32 = 70.0;
const FOOTER_HEIGHT: f32 = 30.0;

const TITLE_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;

/// Emits the paginated receipt document as a fixed sequence of sections,
/// advancing a vertical cursor and breaking to a new page when a section
/// would not fit. Only the offer band is conditional.
pub struct DocumentLayout {
    cursor: f32
}

impl DocumentLayout {
    pub fn new() -> Self {
        Self { cursor: MARGIN }
    }

    pub fn render(mut self, receipt: &TransactionReceipt, canvas: &mut impl Canvas) {
        self.header_band(receipt, canvas);
        self.status_badge(canvas);
        self.transaction_details(receipt, canvas);
        self.party_boxes(receipt, canvas);
        self.item_table(receipt, canvas);
        self.rewards_band(receipt, canvas);

        if let Some(offer) = &receipt.offer {
            self.offer_band(offer, canvas);
        }

        self.support_band(canvas);
        self.footer_band(receipt, canvas);
    }

    fn ensure_space(&mut self, needed: f32, canvas: &mut impl Canvas) {
        if self.cursor + needed > PAGE_HEIGHT - MARGIN {
            canvas.new_page();
            self.cursor = MARGIN;
        }
    }

    fn header_band(&mut self, receipt: &TransactionReceipt, canvas: &mut impl Canvas) {
        canvas.set_fill(BRAND_COLOR);
        canvas.filled_rect(0.0, 0.0, PAGE_WIDTH, HEADER_HEIGHT);
        canvas.set_fill(WHITE);
        canvas.text(MARGIN, 30.0, TITLE_SIZE, "DIVINE MOBILE");
        canvas.text(MARGIN, 52.0, BODY_SIZE, "Official Purchase Receipt");
        canvas.text(
            PAGE_WIDTH - MARGIN - 160.0,
            30.0,
            BODY_SIZE,
            &format!("Receipt #{}", receipt.transaction_id)
        );

        self.cursor = HEADER_HEIGHT + 20.0;
    }

    fn status_badge(&mut self, canvas: &mut impl Canvas) {
        self.ensure_space(BAND_HEIGHT + 10.0, canvas);

        canvas.set_fill(SUCCESS);
        canvas.filled_rect(MARGIN, self.cursor, 120.0, BAND_HEIGHT);
        canvas.set_fill(WHITE);
        canvas.text(MARGIN + 12.0, self.cursor + 17.0, HEADING_SIZE, "PAID");

        self.cursor += BAND_HEIGHT + 14.0;
    }

    fn transaction_details(&mut self, receipt: &TransactionReceipt, canvas: &mut impl Canvas) {
        let lines = [
            format!("Transaction ID: {}", receipt.transaction_id),
            format!("Authorization: {}", receipt.authorization_id),
            format!("Date: {} UTC", receipt.timestamp.format("%Y-%m-%d %H:%M")),
            format!("Payment method: {}", receipt.payment_method),
        ];

        let box_height = 16.0 + lines.len() as f32 * ROW_HEIGHT;
        self.ensure_space(box_height + 10.0, canvas);

        canvas.set_fill(BLACK);
        canvas.rect(MARGIN, self.cursor, CONTENT_WIDTH, box_height);

        let mut line_y = self.cursor + 20.0;

        for line in &lines {
            canvas.text(MARGIN + 10.0, line_y, BODY_SIZE, line);
            line_y += ROW_HEIGHT;
        }

        self.cursor += box_height + 14.0;
    }

    fn party_boxes(&mut self, receipt: &TransactionReceipt, canvas: &mut impl Canvas) {
        self.ensure_space(BOX_HEIGHT + 10.0, canvas);

        let box_width = (CONTENT_WIDTH - 10.0) / 2.0;
        let right_x = MARGIN + box_width + 10.0;

        canvas.set_fill(BLACK);
        canvas.rect(MARGIN, self.cursor, box_width, BOX_HEIGHT);
        canvas.text(MARGIN + 10.0, self.cursor + 18.0, HEADING_SIZE, "Customer");
        canvas.text(
            MARGIN + 10.0,
            self.cursor + 38.0,
            BODY_SIZE,
            &format!("+{}", receipt.customer_phone)
        );

        canvas.rect(right_x, self.cursor, box_width, BOX_HEIGHT);
        canvas.text(right_x + 10.0, self.cursor + 18.0, HEADING_SIZE, "Provider");
        canvas.text(right_x + 10.0, self.cursor + 38.0, BODY_SIZE, "Divine Mobile (Pty) Ltd");
        canvas.text(right_x + 10.0, self.cursor + 54.0, BODY_SIZE, "Johannesburg, South Africa");

        self.cursor += BOX_HEIGHT + 14.0;
    }

    fn item_table(&mut self, receipt: &TransactionReceipt, canvas: &mut impl Canvas) {
        self.ensure_space(ROW_HEIGHT * 2.0, canvas);

        canvas.set_fill(BRAND_COLOR);
        canvas.filled_rect(MARGIN, self.cursor, CONTENT_WIDTH, ROW_HEIGHT);
        canvas.set_fill(WHITE);
        canvas.text(MARGIN + 6.0, self.cursor + 13.0, BODY_SIZE, "Network");
        canvas.text(MARGIN + 120.0, self.cursor + 13.0, BODY_SIZE, "Type");
        canvas.text(MARGIN + 240.0, self.cursor + 13.0, BODY_SIZE, "Qty");
        canvas.text(MARGIN + 300.0, self.cursor + 13.0, BODY_SIZE, "Price");
        canvas.text(MARGIN + 400.0, self.cursor + 13.0, BODY_SIZE, "Total");

        self.cursor += ROW_HEIGHT;

        for (index, item) in receipt.items.iter().enumerate() {
            self.ensure_space(ROW_HEIGHT, canvas);

            // Alternating row shading, odd rows only.
            if index % 2 == 1 {
                canvas.set_fill(ROW_SHADE);
                canvas.filled_rect(MARGIN, self.cursor, CONTENT_WIDTH, ROW_HEIGHT);
            }

            canvas.set_fill(BLACK);
            canvas.text(MARGIN + 6.0, self.cursor + 13.0, BODY_SIZE, &item.network);
            canvas.text(MARGIN + 120.0, self.cursor + 13.0, BODY_SIZE, &item.item_type);
            canvas.text(MARGIN + 240.0, self.cursor + 13.0, BODY_SIZE, &item.quantity.to_string());
            canvas.text(MARGIN + 300.0, self.cursor + 13.0, BODY_SIZE, &format!("R{:.2}", item.price));
            canvas.text(MARGIN + 400.0, self.cursor + 13.0, BODY_SIZE, &format!("R{:.2}", item.line_total()));

            self.cursor += ROW_HEIGHT;
        }

        self.cursor += 14.0;
    }

    fn rewards_band(&mut self, receipt: &TransactionReceipt, canvas: &mut impl Canvas) {
        self.ensure_space(BAND_HEIGHT * 2.0 + 10.0, canvas);

        canvas.set_fill(BAND_COLOR);
        canvas.filled_rect(MARGIN, self.cursor, CONTENT_WIDTH, BAND_HEIGHT * 2.0);
        canvas.set_fill(BLACK);
        canvas.text(
            MARGIN + 10.0,
            self.cursor + 17.0,
            HEADING_SIZE,
            &format!("Total paid: R{:.2}", receipt.amount)
        );
        canvas.text(
            MARGIN + 10.0,
            self.cursor + 17.0 + BAND_HEIGHT,
            BODY_SIZE,
            &format!(
                "Cashback earned: R{:.2}   OneCard points: {}",
                receipt.cashback_earned, receipt.loyalty_points
            )
        );

        self.cursor += BAND_HEIGHT * 2.0 + 14.0;
    }

    fn offer_band(&mut self, offer: &str, canvas: &mut impl Canvas) {
        self.ensure_space(BAND_HEIGHT + 10.0, canvas);

        canvas.set_fill(BAND_COLOR);
        canvas.filled_rect(MARGIN, self.cursor, CONTENT_WIDTH, BAND_HEIGHT);
        canvas.set_fill(BRAND_COLOR);
        canvas.text(MARGIN + 10.0, self.cursor + 17.0, BODY_SIZE, offer);

        self.cursor += BAND_HEIGHT + 14.0;
    }

    fn support_band(&mut self, canvas: &mut impl Canvas) {
        self.ensure_space(BAND_HEIGHT + 10.0, canvas);

        canvas.set_fill(BLACK);
        canvas.text(
            MARGIN,
            self.cursor + 13.0,
            BODY_SIZE,
            "Questions? WhatsApp +27 10 020 0300 or email support@divinemobile.co.za"
        );

        self.cursor += BAND_HEIGHT + 10.0;
    }

    fn footer_band(&mut self, receipt: &TransactionReceipt, canvas: &mut impl Canvas) {
        self.ensure_space(FOOTER_HEIGHT, canvas);

        canvas.set_fill(BRAND_COLOR);
        canvas.filled_rect(0.0, PAGE_HEIGHT - FOOTER_HEIGHT, PAGE_WIDTH, FOOTER_HEIGHT);
        canvas.set_fill(WHITE);
        canvas.text(
            MARGIN,
            PAGE_HEIGHT - 11.0,
            BODY_SIZE,
            &format!("Divine Mobile - keep this receipt for your records - {}", receipt.transaction_id)
        );
    }
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self::new()
    }
}
