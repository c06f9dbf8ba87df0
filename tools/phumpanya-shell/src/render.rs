//! Plain-text rendering of the storefront for the terminal.

use std::fmt;

use phumpanya_common::display::StarBreakdown;
use phumpanya_common::navigation::Page;
use phumpanya_common::price::format_baht;
use phumpanya_common::product::{Product, ProductCategory};
use phumpanya_common::session::Session;
use phumpanya_common::toast::ToastQueue;

const STORE_NAME: &str = "ตลาดภูมิปัญญา";

/// The page the session is currently showing, plus any open quick view.
pub struct PageView<'a>(pub &'a Session);

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let page = session.effective_page();
        writeln!(
            f,
            "== {STORE_NAME} :: {} :: {} ({}) ==",
            page.label(),
            Page::Cart.label(),
            session.cart().line_count()
        )?;

        match page {
            Page::Home => home(f, session)?,
            Page::Listing => listing(f, session)?,
            Page::ProductDetail => match session.selected_product() {
                Some(product) => detail(f, session, product)?,
                None => listing(f, session)?,
            },
            Page::Cart => cart(f, session)?,
            Page::Stories => {
                writeln!(f, "เรื่องราวจากชุมชน: เร็วๆ นี้")?;
            }
            Page::About => {
                writeln!(
                    f,
                    "เราคือสะพานเชื่อมระหว่างภูมิปัญญาของชาติกับโอกาสทางเศรษฐกิจยุคใหม่"
                )?;
            }
            Page::Confirmation => {
                writeln!(f, "ขอบคุณสำหรับคำสั่งซื้อ!")?;
                writeln!(f, "เราได้รับคำสั่งซื้อของคุณแล้วและกำลังดำเนินการจัดส่งให้เร็วที่สุด")?;
            }
        }

        if let Some(product) = session.quick_view_product() {
            writeln!(f, "-- ดูแบบด่วน --")?;
            writeln!(f, "{} · {}", product.name, product.price)?;
            writeln!(f, "{}", product.story)?;
        }
        Ok(())
    }
}

fn product_row(f: &mut fmt::Formatter<'_>, product: &Product) -> fmt::Result {
    writeln!(
        f,
        "  [{:>2}] {} | {} | {} | {} | {}",
        product.id.0,
        product.name,
        product.category,
        product.province,
        product.price,
        StarBreakdown::from_rating(product.rating).to_text()
    )
}

fn home(f: &mut fmt::Formatter<'_>, session: &Session) -> fmt::Result {
    let categories: Vec<&str> = ProductCategory::all().iter().map(|c| c.label()).collect();
    writeln!(f, "หมวดหมู่: {}", categories.join(" · "))?;
    writeln!(f, "สินค้าแนะนำจากชุมชน:")?;
    for product in session.featured_products() {
        product_row(f, product)?;
    }
    Ok(())
}

fn listing(f: &mut fmt::Formatter<'_>, session: &Session) -> fmt::Result {
    let filter = session.filter();
    if !filter.query.is_empty() {
        writeln!(f, "ผลการค้นหาสำหรับ: \"{}\"", filter.query)?;
    }
    if !filter.categories.is_empty() {
        let labels: Vec<&str> = filter.categories.iter().map(|c| c.label()).collect();
        writeln!(f, "หมวดหมู่: {}", labels.join(", "))?;
    }
    if !filter.provinces.is_empty() {
        let names: Vec<&str> = filter.provinces.iter().map(String::as_str).collect();
        writeln!(f, "จังหวัด: {}", names.join(", "))?;
    }
    writeln!(f, "เรียงตาม: {}", filter.sort.label())?;

    let products = session.visible_products();
    if products.is_empty() {
        writeln!(f, "ไม่พบสินค้าที่ตรงกัน")?;
        let hint = if filter.query.is_empty() {
            "ลองปรับเปลี่ยนตัวกรองของคุณ"
        } else {
            "ลองใช้คำค้นหาอื่น"
        };
        return writeln!(f, "{hint}");
    }
    writeln!(f, "{} รายการ", products.len())?;
    for product in products {
        product_row(f, product)?;
    }
    Ok(())
}

fn detail(f: &mut fmt::Formatter<'_>, session: &Session, product: &Product) -> fmt::Result {
    writeln!(f, "{} [{}]", product.name, product.id)?;
    writeln!(f, "{} · {} · {}", product.producer, product.province, product.category)?;
    writeln!(
        f,
        "{} {} ({} รีวิว)",
        StarBreakdown::from_rating(product.rating).to_text(),
        product.rating,
        product.review_count
    )?;
    writeln!(f, "ราคา: {}", product.price)?;
    writeln!(f, "{}", product.long_story)?;

    let related = session.related_products();
    if !related.is_empty() {
        writeln!(f, "สินค้าอื่นที่น่าสนใจ:")?;
        for product in related {
            product_row(f, product)?;
        }
    }
    Ok(())
}

fn cart(f: &mut fmt::Formatter<'_>, session: &Session) -> fmt::Result {
    let items = session.cart_items();
    if items.is_empty() {
        writeln!(f, "ตะกร้าสินค้าของคุณว่างเปล่า")?;
        return writeln!(f, "ดูเหมือนว่าคุณยังไม่ได้เพิ่มสินค้าใดๆ ลงในตะกร้า");
    }
    for (product, line) in items {
        writeln!(
            f,
            "  [{:>2}] {} x{} = {}",
            product.id.0,
            product.name,
            line.quantity,
            format_baht(session.cart().line_total(session.catalog(), line))
        )?;
    }
    let subtotal = format_baht(session.cart_subtotal());
    writeln!(f, "ราคาสินค้า ({} ชิ้น): {subtotal}", session.cart().unit_count())?;
    writeln!(f, "ยอดรวมทั้งหมด: {subtotal}")
}

/// Current notifications, oldest first.
pub struct ToastList<'a>(pub &'a ToastQueue);

impl fmt::Display for ToastList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "(no notifications)");
        }
        for toast in self.0.iter() {
            writeln!(
                f,
                "#{} [{:?}] {}: {}",
                toast.id, toast.kind, toast.title, toast.message
            )?;
        }
        Ok(())
    }
}
