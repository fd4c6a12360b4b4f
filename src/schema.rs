// The table is owned by the data store and is never migrated by this service.
// Only the columns the service reads or writes are declared here.

diesel::table! {
    sales_data_sample (order_number) {
        #[sql_name = "ORDERNUMBER"]
        order_number -> BigInt,
        #[sql_name = "QUANTITYORDERED"]
        quantity_ordered -> Double,
        #[sql_name = "PRICEEACH"]
        price_each -> Double,
        #[sql_name = "SALES"]
        sales -> Double,
        #[sql_name = "ORDERDATE"]
        order_date -> Nullable<Text>,
        #[sql_name = "STATUS"]
        status -> Nullable<Text>,
        #[sql_name = "PRODUCTCODE"]
        product_code -> Nullable<Text>,
    }
}
