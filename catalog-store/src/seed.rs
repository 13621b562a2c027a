//! Default catalog dataset
//!
//! The predefined category set written on first run (seed-on-empty) and by
//! the factory reset. Also serves as the read-only fallback when the
//! database subscription cannot be established.

use shared::{Bilingual, LongSpec, Product, SpecSheet, SubProduct};

fn bl(en: &str, jp: &str) -> Bilingual {
    Bilingual::new(en, jp)
}

fn long_spec(label: Bilingual, value: Bilingual) -> LongSpec {
    LongSpec { label, value }
}

fn sub(name: Bilingual, image: &str) -> SubProduct {
    SubProduct {
        name,
        description: None,
        image: image.to_string(),
    }
}

/// The six default categories shown on the site before any admin edits
pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: "meat-goat".into(),
            name: bl("Meat Products", "ハラール山羊肉"),
            description: bl(
                "Premium quality goat meat sourced directly from trusted farms. Available in various cuts suitable for curries, grilling, and roasting. Fully Halal certified.",
                "信頼できる農場から直接調達した最高品質の山羊肉。カレー、グリル、ローストなど、様々な料理に適したカットをご用意しています。完全ハラール認証済み。",
            ),
            image: "https://images.unsplash.com/photo-1607623814075-e51df1bdc82f?q=80&w=1000&auto=format&fit=crop".into(),
            specs: SpecSheet {
                origin: bl("Australia / Local", "オーストラリア / 国産"),
                grade: Some("Premium".into()),
                temp: bl("Frozen -18°C", "冷凍 -18°C"),
            },
            long_specs: vec![
                long_spec(bl("Processing", "加工方法"), bl("Skin-on / Skin-off", "皮付き / 皮なし")),
                long_spec(bl("Certification", "認証"), bl("Halal Certified", "ハラール認証")),
                long_spec(bl("Packaging", "包装"), bl("Vacuum Pack", "真空パック")),
            ],
            sub_products: vec![
                sub(bl("Skin-On Mutton Cut", "皮付きマトンカット"), "https://images.unsplash.com/photo-1603048297172-c92544798d5e?q=80&w=500&auto=format&fit=crop"),
                sub(bl("Goat Leg Whole", "山羊もも肉（ホール）"), "https://images.unsplash.com/photo-1551028150-64b9f398f678?q=80&w=500&auto=format&fit=crop"),
                sub(bl("Boneless Cubes", "骨なしキューブ"), "https://images.unsplash.com/photo-1578861256505-d3be7cb037d3?q=80&w=500&auto=format&fit=crop"),
            ],
        },
        Product {
            id: "rice".into(),
            name: bl("Basmati Rice", "バスマティライス"),
            description: bl(
                "Extra long grain Basmati rice known for its delicate fragrance and fluffy texture. Aged to perfection for the best biryani experience.",
                "繊細な香りとふわっとした食感で知られる極長粒バスマティライス。最高のビリヤニ体験のために熟成されています。",
            ),
            image: "https://images.unsplash.com/photo-1586201375761-83865001e31c?q=80&w=1000&auto=format&fit=crop".into(),
            specs: SpecSheet {
                origin: bl("India / Pakistan", "インド / パキスタン"),
                grade: Some("1121 XXL".into()),
                temp: bl("Dry Storage", "常温保存"),
            },
            long_specs: vec![
                long_spec(bl("Grain Length", "粒の長さ"), bl("8.3mm+", "8.3mm以上")),
                long_spec(bl("Aging", "熟成期間"), bl("min. 12 months", "最低12ヶ月")),
                long_spec(bl("Bag Size", "袋サイズ"), bl("5kg / 20kg", "5kg / 20kg")),
            ],
            sub_products: vec![
                sub(bl("India Gate Classic", "インディアゲート クラシック"), "https://images.unsplash.com/photo-1626082927389-6cd097cdc6ec?q=80&w=500&auto=format&fit=crop"),
                sub(bl("Daawat Chef's Secret", "ダワット シェフズシークレット"), "https://images.unsplash.com/photo-1536304993881-ff6e9eefa2a6?q=80&w=500&auto=format&fit=crop"),
            ],
        },
        Product {
            id: "spices".into(),
            name: bl("Spices & Masalas", "スパイス & マサラ"),
            description: bl(
                "A comprehensive collection of whole and ground spices. From aromatic cardamom to fiery chili powder, essential for authentic Asian cuisine.",
                "ホールスパイスからパウダースパイスまで、包括的なラインナップ。香り高いカルダモンから激辛チリパウダーまで、本格的なアジア料理に欠かせません。",
            ),
            image: "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?q=80&w=1000&auto=format&fit=crop".into(),
            specs: SpecSheet {
                origin: bl("Global", "世界各国"),
                grade: Some("Export Quality".into()),
                temp: bl("Dry Storage", "常温保存"),
            },
            long_specs: vec![
                long_spec(bl("Type", "タイプ"), bl("Whole & Ground", "ホール & パウダー")),
                long_spec(bl("Packaging", "包装"), bl("Bulk / Retail", "業務用 / 小売用")),
            ],
            sub_products: vec![
                sub(bl("Green Cardamom", "グリーンカルダモン"), "https://images.unsplash.com/photo-1557800636-894a64c1696f?q=80&w=500&auto=format&fit=crop"),
                sub(bl("Cumin Seeds", "クミンシード"), "https://images.unsplash.com/photo-1599940859674-a7fef05b94ae?q=80&w=500&auto=format&fit=crop"),
                sub(bl("MDH Masala Mix", "MDH マサラミックス"), "https://images.unsplash.com/photo-1509358271058-acd22cc93898?q=80&w=500&auto=format&fit=crop"),
            ],
        },
        Product {
            id: "daal-beans".into(),
            name: bl("Daal & Beans", "豆類 & ダール"),
            description: bl(
                "A wide selection of premium lentils, pulses, and beans. Featuring high-quality Yellow Moong Dal, Toor Dal, and Chickpeas essential for authentic Asian cuisine.",
                "高品質なレンズ豆、豆類を幅広く取り揃えています。本格的なアジア料理に欠かせないイエロームングダール、トゥールダール、ひよこ豆などをご用意しています。",
            ),
            image: "https://images.unsplash.com/photo-1515543904379-3d757afe726e?q=80&w=1000&auto=format&fit=crop".into(),
            specs: SpecSheet {
                origin: bl("India / Myanmar / Canada", "インド / ミャンマー / カナダ"),
                grade: Some("Sortex Cleaned".into()),
                temp: bl("Dry Storage", "常温保存"),
            },
            long_specs: vec![
                long_spec(bl("Variety", "種類"), bl("Whole / Split / Washed", "ホール / 挽き割り / 洗浄済み")),
                long_spec(bl("Packaging", "包装"), bl("1kg / 5kg / 25kg", "1kg / 5kg / 25kg")),
            ],
            sub_products: vec![
                sub(bl("Toor Dal", "トゥールダール"), "https://images.unsplash.com/photo-1585996323540-c78fa3831087?q=80&w=500&auto=format&fit=crop"),
                sub(bl("Chickpeas (Kabuli)", "ひよこ豆"), "https://images.unsplash.com/photo-1587486913049-53fc88a55219?q=80&w=500&auto=format&fit=crop"),
                sub(bl("Yellow Moong Dal", "イエロームングダール"), "https://images.unsplash.com/photo-1515543904379-3d757afe726e?q=80&w=500&auto=format&fit=crop"),
            ],
        },
        Product {
            id: "noodles".into(),
            name: bl("Noodles & Instant", "麺類 & インスタント"),
            description: bl(
                "Popular instant noodles and dried noodles from Nepal and Southeast Asia. Quick, delicious, and nostalgic flavors.",
                "ネパールや東南アジアで人気のインスタント麺や乾麺。手軽で美味しく、懐かしい味わい。",
            ),
            image: "https://images.unsplash.com/photo-1612929633738-8fe44f7ec841?q=80&w=1000&auto=format&fit=crop".into(),
            specs: SpecSheet {
                origin: bl("Nepal / SE Asia", "ネパール / 東南アジア"),
                grade: Some("Standard".into()),
                temp: bl("Dry Storage", "常温保存"),
            },
            long_specs: vec![],
            sub_products: vec![
                sub(bl("Wai Wai Noodles", "ワイワイ ヌードル"), "https://images.unsplash.com/photo-1599020792689-9fdeef965d72?q=80&w=500&auto=format&fit=crop"),
                sub(bl("Rara Noodles", "ララ ヌードル"), "https://images.unsplash.com/photo-1585032226651-759b368d7246?q=80&w=500&auto=format&fit=crop"),
            ],
        },
        Product {
            id: "beverage".into(),
            name: bl("Beverages & Others", "飲料 & その他"),
            description: bl(
                "Refreshing tropical juices, tea, and other pantry essentials to complete your inventory.",
                "トロピカルジュース、お茶、その他在庫を充実させるためのパントリー必需品。",
            ),
            image: "https://images.unsplash.com/photo-1546173159-315724a31696?q=80&w=1000&auto=format&fit=crop".into(),
            specs: SpecSheet {
                origin: bl("Various", "各地"),
                grade: Some("Standard".into()),
                temp: bl("Dry / Cool", "常温 / 冷暗所"),
            },
            long_specs: vec![],
            sub_products: vec![
                sub(bl("Mango Juice", "マンゴージュース"), "https://images.unsplash.com/photo-1623065422902-30a2d299bbe4?q=80&w=500&auto=format&fit=crop"),
                sub(bl("Tokla Tea", "トクラ ティー"), "https://images.unsplash.com/photo-1571934811356-5cc55449d0f1?q=80&w=500&auto=format&fit=crop"),
            ],
        },
    ]
}
