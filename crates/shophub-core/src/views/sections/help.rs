use super::{Block, CardView};

const FAQ: [(&str, &str); 6] = [
    (
        "How do I track my order?",
        "You can track your order by going to 'My Orders' section and clicking on the order \
         you want to track. You'll see real-time updates on your shipment status and \
         estimated delivery date.",
    ),
    (
        "What is your return policy?",
        "We offer a 30-day return policy for most items. Products must be unused and in their \
         original packaging. To initiate a return, go to your order history and select \
         'Return Item'. Refunds are processed within 5-7 business days after we receive your \
         return.",
    ),
    (
        "How can I change my shipping address?",
        "You can update your shipping address in the 'Addresses' section of your account. If \
         you need to change the address for an order that's already placed but not yet \
         shipped, please contact our customer support immediately.",
    ),
    (
        "Do you offer international shipping?",
        "Yes, we ship to over 100 countries worldwide. Shipping costs and delivery times vary \
         by location. You can see the exact shipping cost and estimated delivery date at \
         checkout.",
    ),
    (
        "How do I use a promo code?",
        "During checkout, you'll see a field labeled 'Promo Code' or 'Discount Code'. Enter \
         your code there and click 'Apply'. The discount will be reflected in your order total.",
    ),
    (
        "What payment methods do you accept?",
        "We accept all major credit cards (Visa, Mastercard, American Express, Discover), \
         PayPal, and Apple Pay. All transactions are secured with industry-standard encryption.",
    ),
];

// (title, detail, status)
const CONTACTS: [(&str, &str, &str); 3] = [
    ("Live Chat", "Chat with our support team", "Online now"),
    ("Phone Support", "+1 (555) 123-4567", "Mon-Fri, 9AM-6PM EST"),
    ("Email Support", "support@shophub.com", "Response within 24 hours"),
];

const TOPICS: [(&str, &str); 6] = [
    ("Orders & Shipping", "Track orders, shipping info"),
    ("Payment & Billing", "Payment methods, invoices"),
    ("Returns & Refunds", "Return process, refund status"),
    ("Account & Security", "Password, privacy settings"),
    ("Promotions & Rewards", "Deals, loyalty program"),
    ("Technical Support", "App issues, troubleshooting"),
];

pub(super) fn blocks() -> Vec<Block> {
    let mut blocks = vec![Block::heading("How can we help you?")];

    blocks.push(Block::heading("Contact Us"));
    blocks.extend(CONTACTS.iter().map(|(title, detail, status)| {
        Block::Card(CardView {
            title: title.to_string(),
            lines: vec![detail.to_string()],
            trailing: Some(status.to_string()),
            ..CardView::default()
        })
    }));

    blocks.push(Block::heading("Browse Topics"));
    blocks.extend(TOPICS.iter().map(|(title, description)| {
        Block::Card(CardView {
            title: title.to_string(),
            lines: vec![description.to_string()],
            ..CardView::default()
        })
    }));

    blocks.push(Block::heading("Frequently Asked Questions"));
    blocks.extend(FAQ.iter().map(|(question, answer)| {
        Block::Card(CardView {
            title: question.to_string(),
            lines: vec![answer.to_string()],
            ..CardView::default()
        })
    }));

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_content() {
        let blocks = blocks();
        let cards = blocks
            .iter()
            .filter(|b| matches!(b, Block::Card(_)))
            .count();
        assert_eq!(cards, CONTACTS.len() + TOPICS.len() + FAQ.len());
        assert!(blocks.contains(&Block::heading("Frequently Asked Questions")));
    }
}
