mod reading_order;
