//! WhatsApp checkout: the "payment" is a pre-filled chat message. These
//! builders reproduce the message formats customers and the store staff are
//! used to; change them only together with whoever answers the WhatsApp line.

use contracts::catalog::StorefrontProduct;

use super::cart::{cart_total, CartEntry};

pub const WHATSAPP_NUMBER: &str = "559391445597";

/// Full-cart order message.
pub fn build_order_message(lines: &[CartEntry]) -> String {
    let mut message = String::from("🛍️ *PEDIDO - Casa da Beleza* 🛍️\n\n");

    for (index, line) in lines.iter().enumerate() {
        let subtotal = line.price * line.quantity as f64;
        message.push_str(&format!("*Produto {}:*\n", index + 1));
        message.push_str(&format!("📦 {}\n", line.name));
        message.push_str(&format!("💰 Preço unitário: R$ {:.2}\n", line.price));
        message.push_str(&format!("🔢 Quantidade: {}\n", line.quantity));
        message.push_str(&format!("💵 Subtotal: R$ {:.2}\n\n", subtotal));
    }

    message.push_str(&format!(
        "*TOTAL DO PEDIDO: R$ {:.2}*\n\n",
        cart_total(lines)
    ));
    message.push_str(
        "Olá! Gostaria de finalizar minha compra com os produtos listados acima. Poderia me ajudar?",
    );
    message
}

/// Single-product "Comprar Agora" message.
pub fn build_buy_now_message(product: &StorefrontProduct) -> String {
    format!(
        "🛍️ *COMPRA DIRETA* 🛍️\n\n\
         *Produto:* {}\n\
         *Preço:* R$ {:.2}\n\
         *Categoria:* {}\n\n\
         Olá! Gostaria de comprar este produto. Poderia me ajudar?",
        product.name, product.price, product.category
    )
}

/// wa.me deep link with the message URL-encoded.
pub fn whatsapp_url(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, price: f64, quantity: i32) -> CartEntry {
        CartEntry {
            id: 1,
            name: name.to_string(),
            price,
            image: String::new(),
            quantity,
        }
    }

    #[test]
    fn order_message_lists_items_and_total() {
        let lines = vec![
            CartEntry { id: 1, ..line("Base Líquida", 89.9, 2) },
            CartEntry { id: 2, ..line("Shampoo", 45.9, 1) },
        ];
        let message = build_order_message(&lines);

        assert!(message.starts_with("🛍️ *PEDIDO - Casa da Beleza* 🛍️\n\n"));
        assert!(message.contains("*Produto 1:*\n📦 Base Líquida\n"));
        assert!(message.contains("💰 Preço unitário: R$ 89.90\n"));
        assert!(message.contains("🔢 Quantidade: 2\n"));
        assert!(message.contains("💵 Subtotal: R$ 179.80\n"));
        assert!(message.contains("*Produto 2:*\n📦 Shampoo\n"));
        assert!(message.contains("*TOTAL DO PEDIDO: R$ 225.70*"));
        assert!(message.ends_with("Poderia me ajudar?"));
    }

    #[test]
    fn buy_now_message_has_product_fields() {
        let product = StorefrontProduct {
            id: 3,
            name: "Perfume Flor do Campo".into(),
            description: None,
            price: 159.9,
            category_id: Some(4),
            category: "Perfumes".into(),
            image: String::new(),
            rating: 4.6,
            review_count: 203,
            stock: 12,
        };
        let message = build_buy_now_message(&product);
        assert!(message.contains("*Produto:* Perfume Flor do Campo"));
        assert!(message.contains("*Preço:* R$ 159.90"));
        assert!(message.contains("*Categoria:* Perfumes"));
    }

    #[test]
    fn deep_link_is_url_encoded() {
        let url = whatsapp_url("559391445597", "Olá, tudo bem? *PEDIDO*");
        assert!(url.starts_with("https://wa.me/559391445597?text="));
        assert!(!url.contains(' '));
        assert!(!url.contains('*'));
    }
}
