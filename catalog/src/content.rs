//! Default site content
//!
//! The data set the pages render. Built once at startup and shared read-only.

use crate::filter::CategoryMenu;
use crate::types::{
    CategoryOption, CompanyValue, ContactDetails, GalleryImage, Milestone, PriceTiers, Product, Project, Stat,
    TeamMember, Testimonial,
};

pub const COMPANY_NAME: &str = "Premium Indonesia's Commodities";

const DEFAULT_WHATSAPP_NUMBER: &str = "6281385622350";

/// Everything the site displays
#[derive(Clone, Debug)]
pub struct SiteContent {
    pub gallery: Vec<GalleryImage>,
    pub gallery_menu: CategoryMenu,
    pub projects: Vec<Project>,
    pub portfolio_menu: CategoryMenu,
    pub portfolio_stats: Vec<Stat>,
    pub products: Vec<Product>,
    pub product_menu: CategoryMenu,
    pub testimonials: Vec<Testimonial>,
    pub values: Vec<CompanyValue>,
    pub milestones: Vec<Milestone>,
    pub team: Vec<TeamMember>,
    pub contact: ContactDetails,
}

impl SiteContent {
    pub fn new(contact: ContactDetails) -> Self {
        let products = default_products();
        let product_menu = CategoryMenu::from_items(&products);

        Self {
            gallery: default_gallery(),
            gallery_menu: gallery_menu(),
            projects: default_projects(),
            portfolio_menu: portfolio_menu(),
            portfolio_stats: portfolio_stats(),
            products,
            product_menu,
            testimonials: default_testimonials(),
            values: company_values(),
            milestones: milestones(),
            team: team(),
            contact,
        }
    }

    pub fn with_whatsapp_number(number: impl Into<String>) -> Self {
        Self::new(ContactDetails {
            whatsapp_number: number.into(),
            ..default_contact()
        })
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::new(default_contact())
    }
}

pub fn default_contact() -> ContactDetails {
    ContactDetails {
        email: "sales@premiumindonesia.id".to_string(),
        address_lines: vec![
            "Griya Sukadalem Indah Blok A2 no 1, Sukadalem, Kabupaten Serang, Banten".to_string(),
            "Indonesia".to_string(),
        ],
        whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=800&q=80")
}

fn avatar(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

fn image(id: &str, photo: &str, alt: &str, category: &str, title: &str, description: &str) -> GalleryImage {
    GalleryImage {
        id: id.to_string(),
        src: unsplash(photo),
        alt: alt.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn default_gallery() -> Vec<GalleryImage> {
    vec![
        image(
            "1",
            "1511537190424-bbbab87ac5eb",
            "Plantation in the mountains",
            "farms",
            "Mountain Plantation",
            "High-altitude farms in the volcanic highlands",
        ),
        image(
            "2",
            "1442512595331-e89e73853f31",
            "Farmer picking the harvest",
            "farms",
            "Hand-Picked Excellence",
            "Skilled farmers carefully selecting the ripest harvest",
        ),
        image(
            "3",
            "1559525839-b184a4d698c7",
            "Harvest drying process",
            "processing",
            "Natural Drying Process",
            "Sun-drying the harvest to achieve optimal flavor profiles",
        ),
        image(
            "4",
            "1611854779393-1b2da9d400fe",
            "Dried spice close-up",
            "beans",
            "Premium Dried Spices",
            "Carefully dried produce showcasing its rich color and oils",
        ),
        image(
            "5",
            "1565600444102-063f8a7a1e37",
            "Quality testing session",
            "quality",
            "Quality Testing",
            "Professional grading sessions to ensure exceptional quality",
        ),
        image(
            "6",
            "1514432324607-a09d9b4aefdd",
            "Packaging facility",
            "processing",
            "Modern Packaging",
            "State-of-the-art packaging facility ensuring freshness",
        ),
        image(
            "7",
            "1497636577773-f1231844b336",
            "Farm landscape",
            "farms",
            "Sustainable Farming",
            "Eco-friendly farms practicing sustainable agriculture",
        ),
        image(
            "8",
            "1509042239860-f550ce710b93",
            "Green peppercorns",
            "beans",
            "Green Peppercorns",
            "Fresh produce ready for export",
        ),
        image(
            "9",
            "1495474472287-4d71bcdd2085",
            "Quality control",
            "quality",
            "Quality Assurance",
            "Rigorous quality control processes at every stage",
        ),
    ]
}

fn gallery_menu() -> CategoryMenu {
    CategoryMenu::new(vec![
        CategoryOption::new("all", "All"),
        CategoryOption::new("farms", "Farms"),
        CategoryOption::new("processing", "Processing"),
        CategoryOption::new("beans", "Beans"),
        CategoryOption::new("quality", "Quality"),
    ])
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    client: &str,
    location: &str,
    year: &str,
    category: &str,
    description: &str,
    photo: &str,
    results: &[&str],
    product_types: &[&str],
    volume: &str,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        client: client.to_string(),
        location: location.to_string(),
        year: year.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        image: unsplash(photo),
        results: strings(results),
        product_types: strings(product_types),
        volume: volume.to_string(),
    }
}

fn default_projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "Premium Pepper Supply Chain",
            "European Spice Importers Alliance",
            "Lampung & Bangka",
            "2023",
            "supply-chain",
            "Established a supply chain connecting 15 smallholder farms with European importers, ensuring consistent quality and fair trade practices.",
            "1511537190424-bbbab87ac5eb",
            &[
                "Increased farmer income by 35%",
                "Reduced supply chain costs by 20%",
                "Achieved 99.5% quality consistency",
                "Established long-term partnerships with 15 farms",
            ],
            &["Black Pepper", "Single Origin", "Export Grade"],
            "500 tons annually",
        ),
        project(
            "2",
            "Sustainable Farming Initiative",
            "Green Harvest Co.",
            "Sulawesi & Maluku",
            "2022",
            "sustainability",
            "Implemented sustainable farming practices across 25 farms, focusing on environmental conservation and community development.",
            "1442512595331-e89e73853f31",
            &[
                "Reduced water usage by 40%",
                "Achieved Rainforest Alliance certification",
                "Improved soil health across 1,200 hectares",
                "Trained 150 farmers in sustainable practices",
            ],
            &["Organic", "Fair Trade", "Rainforest Alliance"],
            "300 tons annually",
        ),
        project(
            "3",
            "Specialty Spice Program",
            "Tokyo Premium Foods",
            "Sumatra & Java",
            "2023",
            "specialty",
            "Curated an exclusive specialty program featuring rare varieties from Sumatran and Javanese highland growers.",
            "1559525839-b184a4d698c7",
            &[
                "Secured exclusive access to premium lots",
                "Achieved top grading scores consistently",
                "Increased client revenue by 60%",
                "Established direct trade relationships",
            ],
            &["Long Pepper", "Cardamom", "Cinnamon"],
            "50 tons annually",
        ),
        project(
            "4",
            "Direct Trade Partnership",
            "Artisan Food Network",
            "Banten & West Java",
            "2022",
            "partnerships",
            "Established direct trade partnerships with farming communities, eliminating intermediaries and ensuring fair compensation.",
            "1611854779393-1b2da9d400fe",
            &[
                "Increased farmer profits by 50%",
                "Supported 8 farming communities",
                "Preserved traditional farming methods",
                "Created 200+ sustainable jobs",
            ],
            &["Cloves", "White Pepper", "Palm Sugar"],
            "400 tons annually",
        ),
        project(
            "5",
            "Quality Assurance Program",
            "International Spice Standards",
            "Across Indonesia",
            "2021",
            "quality",
            "Implemented a quality assurance program across multiple origins, establishing new standards for consistency.",
            "1565600444102-063f8a7a1e37",
            &[
                "Achieved 99.8% quality consistency",
                "Reduced defect rates by 85%",
                "Established 12 quality control centers",
                "Trained 300+ quality assessors",
            ],
            &["Black Pepper", "White Pepper", "Commercial Grade"],
            "2,000 tons annually",
        ),
        project(
            "6",
            "Micro-Lot Curation",
            "Boutique Spice Collective",
            "Maluku & Papua",
            "2023",
            "specialty",
            "Curated exclusive micro-lots from award-winning farms, focusing on unique processing methods and exceptional flavor profiles.",
            "1514432324607-a09d9b4aefdd",
            &[
                "Secured 15 competition-winning lots",
                "Achieved record auction prices",
                "Established premium brand positioning",
                "Created exclusive supply agreements",
            ],
            &["Nutmeg", "Mace", "Cloves"],
            "25 tons annually",
        ),
    ]
}

fn portfolio_menu() -> CategoryMenu {
    CategoryMenu::new(vec![
        CategoryOption::new("all", "All Projects"),
        CategoryOption::new("supply-chain", "Supply Chain"),
        CategoryOption::new("sustainability", "Sustainability"),
        CategoryOption::new("specialty", "Specialty Products"),
        CategoryOption::new("partnerships", "Partnerships"),
        CategoryOption::new("quality", "Quality Assurance"),
    ])
}

fn portfolio_stats() -> Vec<Stat> {
    [
        ("Projects Completed", "150+"),
        ("Countries Served", "25"),
        ("Tons Exported", "10,000+"),
        ("Farming Partners", "500+"),
    ]
    .into_iter()
    .map(|(label, value)| Stat {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    origin: &str,
    altitude: &str,
    process: &str,
    flavor_profile: &[&str],
    description: &str,
    image: &str,
    category: &str,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        origin: origin.to_string(),
        altitude: altitude.to_string(),
        process: process.to_string(),
        flavor_profile: strings(flavor_profile),
        description: description.to_string(),
        price: PriceTiers {
            kg5: 9,
            kg10: 15,
            kg25: 25,
        },
        image: image.to_string(),
        category: category.to_string(),
    }
}

fn default_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Black Pepper",
            "Indonesia",
            "1,800-2,200m",
            "dry",
            &["Pungent", "Woody", "Warm"],
            "A bold and pungent spice with a sharp aroma, warm heat, and earthy complexity. Grown in the fertile soils of Indonesia, delivering depth and character to global cuisines.",
            "/static/black-pepper.png",
            "single origin",
        ),
        product(
            "2",
            "Long Pepper",
            "Indonesia",
            "1,400-1,800m",
            "dry",
            &["Sweet", "Earthy", "Nutmeg"],
            "An exotic spice with a sweet, earthy heat and subtle hints of cinnamon and nutmeg. Cultivated in Indonesia's tropical climate, long pepper offers a distinctive flavor that enriches traditional dishes and modern cuisine alike.",
            "/static/long-pepper.png",
            "single origin",
        ),
        product(
            "3",
            "Cloves",
            "Indonesia",
            "900-1,500m",
            "Wet-hulled",
            &["Warm", "Herbal", "Sweet"],
            "Sulawesi cloves are renowned for their warm, intense aroma and rich, slightly sweet flavor with a subtle hint of bitterness. Grown in Indonesia's fertile volcanic soil, these premium cloves add depth to cuisines and are a treasured ingredient in traditional remedies worldwide.",
            "/static/cengkeh-2.png",
            "single origin",
        ),
        product(
            "4",
            "White Pepper",
            "Java Indonesia",
            "Various",
            "Various",
            &["Balanced", "Earthy", "Smooth"],
            "A refined spice with a milder heat and earthy, fermented notes. Harvested in Indonesia, white pepper adds a delicate depth and smooth finish to both traditional and modern cuisine.",
            "/static/lada-1.png",
            "blend",
        ),
        product(
            "5",
            "Cardamom",
            "Sumatera Indonesia",
            "1,500-1,900m",
            "Washed",
            &["Floral", "Citrus", "Menthol"],
            "A fragrant spice with sweet, floral notes and hints of citrus and menthol. Grown in Indonesia's tropical highlands, cardamom brings a unique depth and freshness to culinary creations and beverages worldwide.",
            &unsplash("1514432324607-a09d9b4aefdd"),
            "single origin",
        ),
        product(
            "6",
            "Cinnamon",
            "Indonesia",
            "Various",
            "Various",
            &["Sweet", "Woody", "Rich"],
            "Cinnamon, grown in the fertile volcanic highlands of Sumatra, offers a sweet and warm aroma with subtle woody notes. Revered for its premium quality and rich essential oils, this spice adds depth and natural sweetness to dishes and beverages worldwide.",
            &unsplash("1511537190424-bbbab87ac5eb"),
            "blend",
        ),
    ]
}

fn testimonial(id: &str, quote: &str, name: &str, company: &str, location: &str, seed: &str) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        quote: quote.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        image: Some(avatar(seed)),
    }
}

fn default_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "1",
            "The quality of products from this supplier has transformed our specialty line. Our customers can taste the difference.",
            "Emma Rodriguez",
            "Artisan Roasters",
            "Portland, USA",
            "Emma",
        ),
        testimonial(
            "2",
            "Working with this exporter has been seamless. Their commitment to sustainable farming practices aligns perfectly with our brand values.",
            "Luca Bianchi",
            "Milano Food House",
            "Milan, Italy",
            "Luca",
        ),
        testimonial(
            "3",
            "The consistency and reliability of their quality has allowed us to scale our operations with confidence. A trusted partner for over 5 years.",
            "Akira Tanaka",
            "Tokyo Spice Co.",
            "Tokyo, Japan",
            "Akira",
        ),
        testimonial(
            "4",
            "Their direct trade relationships ensure we get unique flavor profiles that our competitors simply cannot match.",
            "Sarah Johnson",
            "Urban Grind",
            "Melbourne, Australia",
            "Sarah",
        ),
        testimonial(
            "5",
            "The traceability of their products from farm to table has been instrumental in our marketing story.",
            "Carlos Mendez",
            "Café Altura",
            "Mexico City, Mexico",
            "Carlos",
        ),
        testimonial(
            "6",
            "We've tried many suppliers, but none match the rich, complex flavors of these spices. Their commitment to quality is unmatched.",
            "Olivia Chen",
            "Brew Culture",
            "Vancouver, Canada",
            "Olivia",
        ),
    ]
}

fn company_values() -> Vec<CompanyValue> {
    [
        (
            "Quality Excellence",
            "We source only the finest commodities, ensuring exceptional quality through rigorous selection and testing processes.",
        ),
        (
            "Sustainability",
            "Our commitment to environmental stewardship drives every decision, from farming practices to packaging solutions.",
        ),
        (
            "Global Reach",
            "With partners across six continents, we connect exceptional growers with discerning buyers worldwide.",
        ),
        (
            "Fair Trade",
            "We believe in building lasting relationships with farmers, ensuring fair compensation and supporting local communities.",
        ),
        (
            "Industry Recognition",
            "Our dedication to excellence has earned us awards and certifications from international trade organizations.",
        ),
        (
            "Passion Driven",
            "Trade is more than our business. We're dedicated to sharing Indonesia's finest harvests with the world.",
        ),
    ]
    .into_iter()
    .map(|(title, description)| CompanyValue {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn milestones() -> Vec<Milestone> {
    [
        ("2005", "Company founded with a vision to connect farmers and buyers"),
        ("2008", "Established partnerships with farms across Sumatra and Java"),
        ("2012", "Expanded to Asian markets with new Sulawesi and Maluku origins"),
        ("2016", "Achieved Fair Trade and Organic certifications"),
        ("2019", "Launched direct trade program with 50+ farming communities"),
        ("2023", "Reached milestone of 1000+ satisfied customers worldwide"),
    ]
    .into_iter()
    .map(|(year, event)| Milestone {
        year: year.to_string(),
        event: event.to_string(),
    })
    .collect()
}

fn team() -> Vec<TeamMember> {
    [
        ("Kokoh Satria", "Founder", "Maria"),
        ("Jonathan Gabriel", "Co-Founder", "James"),
        ("Reza Kurnia", "Advisor", "Ana"),
    ]
    .into_iter()
    .map(|(name, role, seed)| TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        image: avatar(seed),
    })
    .collect()
}
