use gilded_rose_inventory::RawItem;

/// The standard opening stock.
pub fn items() -> Vec<RawItem> {
    vec![
        RawItem::new("+5 Dexterity Vest", 10, 20),
        RawItem::new("Aged Brie", 2, 0),
        RawItem::new("Elixir of the Mongoose", 5, 7),
        RawItem::new("Sulfuras, Hand of Ragnaros", 0, 80),
        RawItem::new("Sulfuras, Hand of Ragnaros", -1, 80),
        RawItem::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        RawItem::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        RawItem::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        RawItem::new("Conjured Mana Cake", 3, 6),
    ]
}
