//! Seed catalog.
//!
//! The demo storefront ships with a small fashion catalog so the API is
//! browsable out of the box.

use rust_decimal::Decimal;

use crate::{
    domain::catalog::{
        MemCatalogRepository,
        errors::CatalogServiceError,
        models::{CategoryUuid, NewCategory, NewProduct},
    },
    store::Store,
};

struct SeedProduct {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    price_cents: i64,
    category_slug: &'static str,
    image: &'static str,
    sizes: &'static [&'static str],
    colors: &'static [&'static str],
}

const SEED_CATEGORIES: [(&str, &str, &str, &str); 4] = [
    (
        "WOMAN",
        "woman",
        "Women's fashion collection",
        "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=1000",
    ),
    (
        "MAN",
        "man",
        "Men's fashion collection",
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=1000",
    ),
    (
        "KIDS",
        "kids",
        "Children's fashion collection",
        "https://images.unsplash.com/photo-1503454537195-1dcabb73ffb9?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=1000",
    ),
    (
        "HOME",
        "home",
        "Home decor and accessories",
        "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=1000",
    ),
];

const SEED_PRODUCTS: [SeedProduct; 8] = [
    SeedProduct {
        name: "WOOL BLEND COAT",
        slug: "wool-blend-coat",
        description: "Elegant wool blend coat with minimalist design",
        price_cents: 12990_00,
        category_slug: "woman",
        image: "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=800",
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["Black", "Camel", "Navy"],
    },
    SeedProduct {
        name: "LEATHER HANDBAG",
        slug: "leather-handbag",
        description: "Premium leather handbag with sophisticated styling",
        price_cents: 8990_00,
        category_slug: "woman",
        image: "https://images.unsplash.com/photo-1584917865442-de89df76afd3?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=800",
        sizes: &["One Size"],
        colors: &["Black", "Brown", "Tan"],
    },
    SeedProduct {
        name: "COTTON POPLIN SHIRT",
        slug: "cotton-poplin-shirt",
        description: "Classic white cotton shirt with clean lines",
        price_cents: 3990_00,
        category_slug: "woman",
        image: "https://images.unsplash.com/photo-1594633313593-bab3825d0caf?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=800",
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["White", "Light Blue"],
    },
    SeedProduct {
        name: "STATEMENT NECKLACE",
        slug: "statement-necklace",
        description: "Bold statement necklace for elegant occasions",
        price_cents: 2990_00,
        category_slug: "woman",
        image: "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=800",
        sizes: &["One Size"],
        colors: &["Gold", "Silver"],
    },
    SeedProduct {
        name: "TAILORED BLAZER",
        slug: "tailored-blazer",
        description: "Professional blazer with perfect fit",
        price_cents: 9990_00,
        category_slug: "woman",
        image: "https://images.unsplash.com/photo-1544441892-794166f1e3be?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=800",
        sizes: &["XS", "S", "M", "L", "XL"],
        colors: &["Black", "Navy", "Charcoal"],
    },
    SeedProduct {
        name: "OVERSIZED SUNGLASSES",
        slug: "oversized-sunglasses",
        description: "Designer sunglasses with UV protection",
        price_cents: 3590_00,
        category_slug: "woman",
        image: "https://images.unsplash.com/photo-1511499767150-a48a237f0083?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=800",
        sizes: &["One Size"],
        colors: &["Black", "Tortoise"],
    },
    SeedProduct {
        name: "PRINTED SILK SCARF",
        slug: "printed-silk-scarf",
        description: "Luxurious silk scarf with artistic print",
        price_cents: 4990_00,
        category_slug: "woman",
        image: "https://images.unsplash.com/photo-1601924994987-69e26d50dc26?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=800",
        sizes: &["One Size"],
        colors: &["Multicolor"],
    },
    SeedProduct {
        name: "LEATHER OXFORD SHOES",
        slug: "leather-oxford-shoes",
        description: "Classic leather shoes with timeless appeal",
        price_cents: 11990_00,
        category_slug: "man",
        image: "https://images.unsplash.com/photo-1549298916-b41d501d3772?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=800",
        sizes: &["39", "40", "41", "42", "43", "44", "45"],
        colors: &["Black", "Brown"],
    },
];

/// Populates an empty store with the demo categories and products.
///
/// # Errors
///
/// Returns an error when a seed slug already exists in the store, i.e. when
/// called twice on the same store.
pub async fn seed_catalog(store: &Store) -> Result<(), CatalogServiceError> {
    let repository = MemCatalogRepository::new();
    let mut tables = store.write().await;

    for (name, slug, description, image_url) in SEED_CATEGORIES {
        repository.insert_category(
            &mut tables,
            NewCategory {
                name: name.to_owned(),
                slug: slug.to_owned(),
                description: Some(description.to_owned()),
                image_url: Some(image_url.to_owned()),
            },
        )?;
    }

    for product in SEED_PRODUCTS {
        let category_uuid: Option<CategoryUuid> = repository
            .category_by_slug(&tables, product.category_slug)
            .map(|category| category.uuid);

        repository.insert_product(
            &mut tables,
            NewProduct {
                name: product.name.to_owned(),
                slug: product.slug.to_owned(),
                description: Some(product.description.to_owned()),
                price: Decimal::new(product.price_cents, 2),
                category_uuid,
                images: vec![product.image.to_owned()],
                sizes: product.sizes.iter().map(ToString::to_string).collect(),
                colors: product.colors.iter().map(ToString::to_string).collect(),
                in_stock: true,
                featured: true,
            },
        )?;
    }

    Ok(())
}
