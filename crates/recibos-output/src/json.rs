use recibos_model::{DocumentRenderer, ModelError, ReceiptDocument, Result};

/// Writes the document model as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl DocumentRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &ReceiptDocument) -> Result<Vec<u8>> {
        let mut bytes = serde_json::to_vec_pretty(document)
            .map_err(|e| ModelError::Render(format!("JSON serialization failed: {e}")))?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use recibos_model::{Block, PageSetup};

    use super::*;

    #[test]
    fn test_render_parses_back() {
        let document = ReceiptDocument {
            title: "Recibo".to_string(),
            page: PageSetup::letter(),
            blocks: vec![Block::Spacer { height: 20 }],
        };
        let bytes = JsonRenderer.render(&document).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["blocks"][0]["kind"], "spacer");
        assert_eq!(value["page"]["width"], 612);
        assert!(bytes.ends_with(b"\n"));
    }
}
