//! Product card: the one place that knows how a product is presented.
//!
//! Price formatting (including the priceless sentinel), the
//! category-to-color mapping, and the add-button state all live here;
//! other views receive already-formatted row data.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::catalog::Product;
use crate::ui::page::CatalogRow;
use crate::ui::theme::{
    ACCENT, CATEGORY_BUTTON, CATEGORY_EXTRA, CATEGORY_HARD, CATEGORY_OTHER, CATEGORY_SOFT,
    DIM_TEXT, HEADER_TEXT,
};

pub fn format_price(price: Option<u64>) -> String {
    match price {
        Some(value) => format!("{value} cr."),
        None => "Priceless".to_string(),
    }
}

pub fn category_color(category: &str) -> Color {
    match category {
        "soft-skill" => CATEGORY_SOFT,
        "hard-skill" => CATEGORY_HARD,
        "button" => CATEGORY_BUTTON,
        "additional" => CATEGORY_EXTRA,
        _ => CATEGORY_OTHER,
    }
}

/// One catalog grid row, ready for the page to display.
pub fn catalog_row(product: &Product) -> CatalogRow {
    CatalogRow {
        id: product.id.clone(),
        title: product.title.clone(),
        category: product.category.clone(),
        price_text: format_price(product.price),
        color: category_color(&product.category),
    }
}

/// The detail card shown inside the modal for the previewed product.
#[derive(Default)]
pub struct Card {
    product: Option<Product>,
    button_label: String,
    button_enabled: bool,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the product and derive the add-button state from whether it
    /// is already in the basket or cannot be bought at all.
    pub fn render(&mut self, product: Product, in_basket: bool) {
        if in_basket {
            self.button_label = "Already in basket".to_string();
            self.button_enabled = false;
        } else if product.price.is_none() {
            self.button_label = "Not for sale".to_string();
            self.button_enabled = false;
        } else {
            self.button_label = "Add to basket [Enter]".to_string();
            self.button_enabled = true;
        }
        self.product = Some(product);
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn button_enabled(&self) -> bool {
        self.button_enabled
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let Some(product) = &self.product else {
            return vec![Line::from("Loading...")];
        };
        let button_style = if self.button_enabled {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM_TEXT)
        };
        vec![
            Line::from(Span::styled(
                product.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                product.category.clone(),
                Style::default().fg(category_color(&product.category)),
            )),
            Line::from(""),
            Line::from(Span::styled(
                product.description.clone(),
                Style::default().fg(HEADER_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format_price(product.price),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(self.button_label.clone(), button_style)),
        ]
    }
}
