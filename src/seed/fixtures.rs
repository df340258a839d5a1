//! Fixed sample data used by the seed profiles.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const SEED_PASSWORD: &str = "secret";

pub struct AccountSpec {
    pub name: &'static str,
    pub email: &'static str,
    pub image: &'static str,
}

pub struct SellerSpec {
    pub name: &'static str,
    pub email: &'static str,
    pub shop_name: &'static str,
    pub district: &'static str,
    pub sub_district: &'static str,
    pub method: &'static str,
    pub image: &'static str,
}

pub struct CategorySpec {
    pub name: &'static str,
    pub slug: &'static str,
    pub image: &'static str,
}

/// Catalog entry. `seller` indexes into the profile's seller list.
pub struct ProductSpec {
    pub name: &'static str,
    pub category: &'static str,
    pub brand: &'static str,
    pub price: Decimal,
    pub stock: i32,
    pub discount: i32,
    pub rating: Decimal,
    pub description: &'static str,
    pub images: &'static [&'static str],
    pub seller: usize,
}

pub fn admins() -> Vec<AccountSpec> {
    vec![
        AccountSpec {
            name: "Super Admin",
            email: "admin@admin.com",
            image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150",
        },
        AccountSpec {
            name: "Admin Manager",
            email: "manager@admin.com",
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150",
        },
    ]
}

pub fn customers() -> Vec<AccountSpec> {
    [
        ("John Smith", "john@customer.com"),
        ("Sarah Johnson", "sarah@customer.com"),
        ("Mike Wilson", "mike@customer.com"),
        ("Emily Davis", "emily@customer.com"),
        ("Alex Chen", "alex@customer.com"),
        ("Lisa Brown", "lisa@customer.com"),
    ]
    .into_iter()
    .map(|(name, email)| AccountSpec {
        name,
        email,
        image: "",
    })
    .collect()
}

pub const LARGE_CUSTOMER_NAMES: &[&str] = &[
    "John Smith",
    "Sarah Johnson",
    "Mike Davis",
    "Emily Brown",
    "David Wilson",
    "Jessica Garcia",
    "Ryan Martinez",
    "Ashley Rodriguez",
    "Kevin Lee",
    "Amanda Taylor",
    "Chris Anderson",
    "Nicole Thomas",
    "Brandon Jackson",
    "Stephanie White",
    "Jordan Harris",
    "Rachel Martin",
    "Tyler Thompson",
    "Samantha Garcia",
    "Austin Clark",
    "Megan Lewis",
    "Nathan Walker",
    "Brittany Hall",
    "Zachary Allen",
    "Danielle Young",
    "Alexander King",
];

pub fn standard_sellers() -> Vec<SellerSpec> {
    vec![
        SellerSpec {
            name: "Collins Tech Store",
            email: "collins@techstore.com",
            shop_name: "Collins Tech Store",
            district: "Nairobi",
            sub_district: "Westlands",
            method: "manually",
            image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=150",
        },
        SellerSpec {
            name: "Fashion Hub",
            email: "fashion@hub.com",
            shop_name: "Fashion Hub",
            district: "Nairobi",
            sub_district: "CBD",
            method: "manually",
            image: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150",
        },
    ]
}

pub fn large_sellers() -> Vec<SellerSpec> {
    vec![
        SellerSpec {
            name: "TechStore Pro",
            email: "seller1@techstore.com",
            shop_name: "TechStore Pro",
            district: "Silicon Valley",
            sub_district: "Palo Alto",
            method: "bank",
            image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=150&h=150&fit=crop",
        },
        SellerSpec {
            name: "Fashion Hub",
            email: "seller2@fashionhub.com",
            shop_name: "Fashion Hub",
            district: "New York",
            sub_district: "Manhattan",
            method: "paypal",
            image: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop",
        },
        SellerSpec {
            name: "Home & Living",
            email: "seller3@homeliving.com",
            shop_name: "Home & Living",
            district: "Austin",
            sub_district: "Downtown",
            method: "bank",
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop",
        },
        SellerSpec {
            name: "Sports World",
            email: "seller4@sportsworld.com",
            shop_name: "Sports World",
            district: "Denver",
            sub_district: "Highlands",
            method: "stripe",
            image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop",
        },
        SellerSpec {
            name: "Beauty Palace",
            email: "seller5@beautypalace.com",
            shop_name: "Beauty Palace",
            district: "Los Angeles",
            sub_district: "Beverly Hills",
            method: "paypal",
            image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop",
        },
    ]
}

pub fn jersey_seller() -> SellerSpec {
    SellerSpec {
        name: "Jersey Kingdom",
        email: "info@jerseykingdom.com",
        shop_name: "Jersey Kingdom",
        district: "Mombasa",
        sub_district: "Nyali",
        method: "manually",
        image: "",
    }
}

/// Sellers created by the `all` profile, with ids that stay the same across runs
pub fn fixed_sellers() -> Vec<(uuid::Uuid, SellerSpec)> {
    let mut sellers = standard_sellers();
    sellers.push(jersey_seller());
    sellers.push(SellerSpec {
        name: "Sports Arena",
        email: "contact@sportsarena.com",
        shop_name: "Sports Arena",
        district: "Kisumu",
        sub_district: "Milimani",
        method: "manually",
        image: "",
    });

    sellers
        .into_iter()
        .zip(1u128..)
        .map(|(spec, n)| (uuid::Uuid::from_u128(0x5e11e700_0000_4000_8000_000000000000 | n), spec))
        .collect()
}

pub fn standard_categories() -> Vec<CategorySpec> {
    vec![
        CategorySpec { name: "Electronics", slug: "electronics", image: "https://images.unsplash.com/photo-1498049794561-7780e7231661?w=400" },
        CategorySpec { name: "Clothing & Fashion", slug: "clothing-fashion", image: "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400" },
        CategorySpec { name: "Home & Garden", slug: "home-garden", image: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400" },
        CategorySpec { name: "Sports & Outdoors", slug: "sports-outdoors", image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400" },
        CategorySpec { name: "Books & Media", slug: "books-media", image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400" },
        CategorySpec { name: "Health & Beauty", slug: "health-beauty", image: "https://images.unsplash.com/photo-1556228720-195a672e8a03?w=400" },
        CategorySpec { name: "Automotive", slug: "automotive", image: "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?w=400" },
        CategorySpec { name: "Toys & Games", slug: "toys-games", image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400" },
    ]
}

pub fn large_categories() -> Vec<CategorySpec> {
    vec![
        CategorySpec { name: "Electronics", slug: "electronics", image: "https://images.unsplash.com/photo-1498049794561-7780e7231661?w=300&h=200&fit=crop" },
        CategorySpec { name: "Fashion & Clothing", slug: "fashion-clothing", image: "https://images.unsplash.com/photo-1445205170230-053b83016050?w=300&h=200&fit=crop" },
        CategorySpec { name: "Home & Garden", slug: "home-garden", image: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=300&h=200&fit=crop" },
        CategorySpec { name: "Sports & Outdoors", slug: "sports-outdoors", image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=300&h=200&fit=crop" },
        CategorySpec { name: "Books & Media", slug: "books-media", image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=200&fit=crop" },
        CategorySpec { name: "Health & Beauty", slug: "health-beauty", image: "https://images.unsplash.com/photo-1596462502278-27bfdc403348?w=300&h=200&fit=crop" },
        CategorySpec { name: "Automotive", slug: "automotive", image: "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?w=300&h=200&fit=crop" },
        CategorySpec { name: "Baby & Kids", slug: "baby-kids", image: "https://images.unsplash.com/photo-1515488042361-ee00e0ddd4e4?w=300&h=200&fit=crop" },
        CategorySpec { name: "Food & Grocery", slug: "food-grocery", image: "https://images.unsplash.com/photo-1542838132-92c53300491e?w=300&h=200&fit=crop" },
        CategorySpec { name: "Jewelry & Accessories", slug: "jewelry-accessories", image: "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=300&h=200&fit=crop" },
        CategorySpec { name: "Office Supplies", slug: "office-supplies", image: "https://images.unsplash.com/photo-1497032628192-86f99bcd76bc?w=300&h=200&fit=crop" },
        CategorySpec { name: "Pet Supplies", slug: "pet-supplies", image: "https://images.unsplash.com/photo-1601758228041-f3b2795255f1?w=300&h=200&fit=crop" },
    ]
}

pub fn jersey_categories() -> Vec<CategorySpec> {
    vec![
        CategorySpec { name: "Premier League", slug: "premier-league", image: "premier-league.jpg" },
        CategorySpec { name: "La Liga", slug: "la-liga", image: "la-liga.jpg" },
        CategorySpec { name: "Serie A", slug: "serie-a", image: "serie-a.jpg" },
        CategorySpec { name: "Vintage Jerseys", slug: "vintage-jerseys", image: "vintage.jpg" },
        CategorySpec { name: "Shoes", slug: "shoes", image: "shoes.jpg" },
    ]
}

pub fn curated_products() -> Vec<ProductSpec> {
    vec![
        ProductSpec { name: "iPhone 15 Pro Max", category: "Electronics", brand: "Apple", price: dec!(1199), stock: 50, discount: 10, rating: dec!(4.8), description: "Latest iPhone with Pro camera system, A17 Pro chip, and titanium design.", images: &["https://images.unsplash.com/photo-1592899677977-9c10ca588bbd?w=500", "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=500"], seller: 0 },
        ProductSpec { name: "Samsung 65\" 4K Smart TV", category: "Electronics", brand: "Samsung", price: dec!(899), stock: 25, discount: 15, rating: dec!(4.5), description: "Ultra HD 4K Smart TV with HDR, built-in streaming apps and a crystal clear display.", images: &["https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=500", "https://images.unsplash.com/photo-1567690187548-f07b1d7bf5a9?w=500"], seller: 0 },
        ProductSpec { name: "MacBook Air M3", category: "Electronics", brand: "Apple", price: dec!(1299), stock: 30, discount: 5, rating: dec!(4.9), description: "Supercharged by M3 chip. Up to 18 hours of battery life.", images: &["https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=500", "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=500"], seller: 1 },
        ProductSpec { name: "Sony WH-1000XM5 Headphones", category: "Electronics", brand: "Sony", price: dec!(399), stock: 40, discount: 20, rating: dec!(4.7), description: "Industry-leading noise canceling with Auto NC Optimizer.", images: &["https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500", "https://images.unsplash.com/photo-1545127398-14699f92334b?w=500"], seller: 0 },
        ProductSpec { name: "Premium Cotton T-Shirt", category: "Clothing & Fashion", brand: "StyleWear", price: dec!(29.99), stock: 100, discount: 20, rating: dec!(4.3), description: "Comfortable premium cotton t-shirt available in multiple colors.", images: &["https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=500", "https://images.unsplash.com/photo-1503341504253-dff4815485f1?w=500"], seller: 1 },
        ProductSpec { name: "Denim Jeans - Slim Fit", category: "Clothing & Fashion", brand: "DenimCo", price: dec!(79.99), stock: 75, discount: 25, rating: dec!(4.6), description: "High-quality denim jeans with slim fit design and stretch fabric.", images: &["https://images.unsplash.com/photo-1542272604-787c3835535d?w=500", "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=500"], seller: 1 },
        ProductSpec { name: "Leather Jacket - Classic", category: "Clothing & Fashion", brand: "LeatherCraft", price: dec!(199.99), stock: 20, discount: 30, rating: dec!(4.8), description: "Genuine leather jacket with classic design.", images: &["https://images.unsplash.com/photo-1551028719-00167b16eac5?w=500", "https://images.unsplash.com/photo-1520975954732-35dd22299614?w=500"], seller: 0 },
        ProductSpec { name: "Running Shoes - Air Max", category: "Clothing & Fashion", brand: "SportsFeet", price: dec!(129.99), stock: 60, discount: 15, rating: dec!(4.4), description: "Comfortable running shoes with air cushioning technology.", images: &["https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=500", "https://images.unsplash.com/photo-1549298916-b41d501d3772?w=500"], seller: 1 },
        ProductSpec { name: "Modern Table Lamp", category: "Home & Garden", brand: "HomeDecor", price: dec!(45.99), stock: 30, discount: 12, rating: dec!(4.4), description: "Elegant modern table lamp with adjustable brightness.", images: &["https://images.unsplash.com/photo-1507473885765-e6ed057f782c?w=500", "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=500"], seller: 0 },
        ProductSpec { name: "Garden Tool Set", category: "Home & Garden", brand: "GreenThumb", price: dec!(89.99), stock: 25, discount: 18, rating: dec!(4.6), description: "Complete garden tool set with stainless steel tools.", images: &["https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=500", "https://images.unsplash.com/photo-1585320806297-9794b3e4eeae?w=500"], seller: 1 },
        ProductSpec { name: "Professional Basketball", category: "Sports & Outdoors", brand: "SportsPro", price: dec!(24.99), stock: 40, discount: 8, rating: dec!(4.7), description: "Official size and weight basketball with excellent grip.", images: &["https://images.unsplash.com/photo-1546519638-68e109498ffc?w=500", "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=500"], seller: 1 },
        ProductSpec { name: "Yoga Mat Premium", category: "Sports & Outdoors", brand: "FitnessGear", price: dec!(39.99), stock: 50, discount: 22, rating: dec!(4.5), description: "Non-slip premium yoga mat with extra cushioning.", images: &["https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=500", "https://images.unsplash.com/photo-1518611012118-696072aa579a?w=500"], seller: 0 },
        ProductSpec { name: "JavaScript: The Complete Guide", category: "Books & Media", brand: "TechBooks", price: dec!(39.99), stock: 60, discount: 30, rating: dec!(4.9), description: "Comprehensive guide to modern JavaScript programming.", images: &["https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=500", "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=500"], seller: 0 },
        ProductSpec { name: "The Art of War - Classic", category: "Books & Media", brand: "ClassicBooks", price: dec!(19.99), stock: 45, discount: 25, rating: dec!(4.7), description: "Timeless classic on strategy. Hardcover edition with original text.", images: &["https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=500", "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=500"], seller: 1 },
        ProductSpec { name: "Organic Face Cream Set", category: "Health & Beauty", brand: "NaturalCare", price: dec!(49.99), stock: 35, discount: 18, rating: dec!(4.5), description: "Organic day and night creams made with natural ingredients.", images: &["https://images.unsplash.com/photo-1556228720-195a672e8a03?w=500", "https://images.unsplash.com/photo-1570554886111-e80fcca6a029?w=500"], seller: 1 },
        ProductSpec { name: "Vitamin C Serum", category: "Health & Beauty", brand: "SkinCare Pro", price: dec!(29.99), stock: 80, discount: 35, rating: dec!(4.6), description: "High-potency Vitamin C serum for brightening.", images: &["https://images.unsplash.com/photo-1556228453-efd6c1ff04b6?w=500", "https://images.unsplash.com/photo-1583743089695-4b816a340f82?w=500"], seller: 0 },
        ProductSpec { name: "Car Dash Camera 4K", category: "Automotive", brand: "RoadEye", price: dec!(119.99), stock: 35, discount: 10, rating: dec!(4.4), description: "Front and rear dash camera with night vision and loop recording.", images: &["https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?w=500"], seller: 0 },
        ProductSpec { name: "Wooden Building Blocks", category: "Toys & Games", brand: "PlayCraft", price: dec!(34.99), stock: 70, discount: 15, rating: dec!(4.8), description: "100-piece natural wood block set for creative play.", images: &["https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=500"], seller: 1 },
    ]
}

pub fn standalone_products() -> Vec<ProductSpec> {
    vec![
        ProductSpec { name: "iPhone 14 Pro Max", category: "Electronics", brand: "Apple", price: dec!(1199), stock: 25, discount: 10, rating: dec!(4.8), description: "Pro camera system, A16 Bionic chip and Dynamic Island.", images: &["https://via.placeholder.com/300x300/1f2937/ffffff?text=iPhone+14+Pro", "https://via.placeholder.com/300x300/374151/ffffff?text=iPhone+Back"], seller: 0 },
        ProductSpec { name: "Samsung Galaxy S23 Ultra", category: "Electronics", brand: "Samsung", price: dec!(1099), stock: 30, discount: 15, rating: dec!(4.7), description: "Flagship Android phone with S Pen, 200MP camera and 5000mAh battery.", images: &["https://via.placeholder.com/300x300/1f2937/ffffff?text=Galaxy+S23"], seller: 0 },
        ProductSpec { name: "MacBook Air M2", category: "Electronics", brand: "Apple", price: dec!(1199), stock: 15, discount: 8, rating: dec!(4.9), description: "Thin and light laptop with the M2 chip.", images: &["https://via.placeholder.com/300x300/1f2937/ffffff?text=MacBook+Air"], seller: 0 },
        ProductSpec { name: "Nike Air Max 270", category: "Clothing & Fashion", brand: "Nike", price: dec!(150), stock: 50, discount: 20, rating: dec!(4.6), description: "Lifestyle sneaker with a large Air unit for all-day comfort.", images: &["https://via.placeholder.com/300x300/1f2937/ffffff?text=Air+Max+270"], seller: 0 },
        ProductSpec { name: "Sony WH-1000XM5", category: "Electronics", brand: "Sony", price: dec!(399), stock: 20, discount: 12, rating: dec!(4.8), description: "Wireless noise canceling headphones with 30-hour battery.", images: &["https://via.placeholder.com/300x300/1f2937/ffffff?text=Sony+XM5"], seller: 0 },
    ]
}

/// Item names combined with brands to generate the large catalog
pub fn generated_lines(category: &str) -> (&'static [&'static str], &'static [&'static str]) {
    match category {
        "Electronics" => (&["Laptop", "Smartphone", "Headphones", "Tablet", "Smartwatch", "Speaker"], &["Apple", "Samsung", "Sony", "Dell", "Lenovo"]),
        "Fashion & Clothing" => (&["Shirt", "Jeans", "Jacket", "Sweater", "Dress", "Sneakers"], &["Levi's", "Zara", "Nike", "Calvin Klein", "Ralph Lauren"]),
        "Home & Garden" => (&["Coffee Maker", "Robot Vacuum", "Air Purifier", "Table Lamp", "Tool Set", "Planter"], &["Keurig", "Dyson", "Fiskars", "Philips", "IKEA"]),
        "Sports & Outdoors" => (&["Tennis Racket", "Mountain Bike", "Yoga Mat", "Camping Tent", "Fishing Rod", "Football"], &["Wilson", "Trek", "Manduka", "REI", "Adidas"]),
        "Books & Media" => (&["Novel", "Programming Guide", "Biography", "Cookbook", "Audiobook", "Atlas"], &["Penguin", "O'Reilly", "HarperCollins", "Random House", "Vintage"]),
        "Health & Beauty" => (&["Serum", "Makeup Palette", "Hair Straightener", "Perfume", "Toothbrush", "Face Mask"], &["Estee Lauder", "Urban Decay", "Chanel", "Oral-B", "Olay"]),
        "Automotive" => (&["Dash Camera", "Car Vacuum", "Tire Inflator", "Seat Cover", "Phone Mount", "Jump Starter"], &["Bosch", "Michelin", "Garmin", "Anker", "Armor All"]),
        "Baby & Kids" => (&["Stroller", "Car Seat", "Baby Monitor", "Play Mat", "Building Blocks", "Onesie Set"], &["Graco", "Chicco", "Fisher-Price", "LEGO", "Carter's"]),
        "Food & Grocery" => (&["Coffee Beans", "Green Tea", "Olive Oil", "Honey", "Granola", "Dark Chocolate"], &["Lavazza", "Twinings", "Bertolli", "Nature Valley", "Lindt"]),
        "Jewelry & Accessories" => (&["Necklace", "Bracelet", "Watch", "Sunglasses", "Wallet", "Earrings"], &["Pandora", "Fossil", "Ray-Ban", "Swarovski", "Tiffany"]),
        "Office Supplies" => (&["Desk Organizer", "Notebook", "Office Chair", "Monitor Stand", "Pen Set", "Whiteboard"], &["Moleskine", "Herman Miller", "Pilot", "Fellowes", "3M"]),
        _ => (&["Dog Bed", "Cat Tree", "Pet Feeder", "Leash", "Chew Toy", "Aquarium"], &["Petmate", "KONG", "PetSafe", "Frisco", "Tetra"]),
    }
}

pub struct Club {
    pub name: &'static str,
    pub league: &'static str,
    pub home: &'static str,
    pub away: &'static str,
}

pub const JERSEY_SIZES: &[&str] = &["S", "M", "L", "XL", "XXL"];
pub const JERSEY_SEASON: &str = "2023/24";

pub fn clubs() -> Vec<Club> {
    vec![
        Club { name: "Manchester City", league: "Premier League", home: "https://images.unsplash.com/photo-1522778119026-d647f0596c20?w=400&h=400&fit=crop", away: "https://images.unsplash.com/photo-1431324155629-1a6deb1dec8d?w=400&h=400&fit=crop" },
        Club { name: "Arsenal", league: "Premier League", home: "https://images.unsplash.com/photo-1579952363873-27f3bade9f55?w=400&h=400&fit=crop", away: "https://images.unsplash.com/photo-1551958219-acbc608c6377?w=400&h=400&fit=crop" },
        Club { name: "Liverpool", league: "Premier League", home: "https://images.unsplash.com/photo-1614632537239-d3e5d9e6f4df?w=400&h=400&fit=crop", away: "https://images.unsplash.com/photo-1589487391730-58f20eb2c308?w=400&h=400&fit=crop" },
        Club { name: "Manchester United", league: "Premier League", home: "https://images.unsplash.com/photo-1508098682722-e99c43a406b2?w=400&h=400&fit=crop", away: "https://images.unsplash.com/photo-1571902943202-507ec2618e8f?w=400&h=400&fit=crop" },
        Club { name: "Real Madrid", league: "La Liga", home: "https://images.unsplash.com/photo-1522778526097-ce0a22ceb253?w=400&h=400&fit=crop", away: "https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=400&h=400&fit=crop" },
        Club { name: "Barcelona", league: "La Liga", home: "https://images.unsplash.com/photo-1511886929837-354d827aae26?w=400&h=400&fit=crop", away: "https://images.unsplash.com/photo-1560272564-c83b66b1ad12?w=400&h=400&fit=crop" },
        Club { name: "Atletico Madrid", league: "La Liga", home: "https://images.unsplash.com/photo-1579952363873-27f3bade9f55?w=400&h=400&fit=crop", away: "https://images.unsplash.com/photo-1614632537290-e8c99e8ba3c0?w=400&h=400&fit=crop" },
        Club { name: "AC Milan", league: "Serie A", home: "https://images.unsplash.com/photo-1579952363873-27f3bade9f55?w=400&h=400&fit=crop", away: "https://images.unsplash.com/photo-1551958219-acbc608c6377?w=400&h=400&fit=crop" },
        Club { name: "Juventus", league: "Serie A", home: "https://images.unsplash.com/photo-1560272564-c83b66b1ad12?w=400&h=400&fit=crop", away: "https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=400&h=400&fit=crop" },
    ]
}

pub const REVIEW_TEXTS: &[&str] = &[
    "Amazing product! Exceeded my expectations in every way.",
    "Great quality and fast shipping. Highly recommend!",
    "Good value for money. Works as described.",
    "Excellent customer service and product quality.",
    "Perfect for my needs. Will buy again!",
    "Outstanding quality and design. Love it!",
    "Fast delivery and great packaging. Product works perfectly.",
    "Exactly what I was looking for. Very satisfied!",
    "High quality materials and construction.",
    "Great product at a reasonable price point.",
];

pub const BANNER_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=1200&h=400&fit=crop",
    "https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=1200&h=400&fit=crop",
    "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=1200&h=400&fit=crop",
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=1200&h=400&fit=crop",
];
