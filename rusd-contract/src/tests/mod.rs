mod contract_exchange_tests;
